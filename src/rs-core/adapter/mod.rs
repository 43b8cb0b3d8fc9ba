use thiserror::Error;

use crate::{
    bindings::SurfaceId,
    host::{HostError, PlaybackHost, SurfaceSpec},
    options::PlaybackOptions,
    source::SourceError,
    wasm_bindgen, LoggerLevel,
};

use self::monitor::FrameMonitor;

pub use self::monitor::FrameCheck;

mod lifecycle;
mod monitor;


/// Name under which the playback is known by the host framework. Sent alongside
/// the `loaded` event.
pub const PLAYBACK_NAME: &str = "hang_playback";

/// Playback type reported to the host framework: contents are always live, there's
/// no seeking nor time-shifting.
pub const LIVE_PLAYBACK_TYPE: &str = "live";

/// Drives a transport client according to the lifecycle calls of a host player
/// framework's playback plugin, and reports the resulting transitions through the
/// host's event bus.
///
/// The client only exists between `render` and `destroy`. Calls which need it
/// before `render` are either deferred (`play`) or rejected with
/// `PlaybackError::NotRendered` (`load`).
pub struct PlaybackAdapter<H: PlaybackHost> {
    host: H,

    /// Current `PlaybackStatus`. Only updated by the adapter's own methods.
    status: PlaybackStatus,

    /// Last source given, either through the options or through `load`.
    source: Option<String>,

    /// Duration of the content in seconds, if known.
    duration: Option<f64>,

    /// Position playback was asked to resume at. Recorded only, as live contents
    /// cannot be seeked into.
    resume_at: Option<f64>,

    muted: bool,

    /// Last volume set, from `0.` to `1.`. `None` until `set_volume` is called, in
    /// which case the client's own default applies.
    volume: Option<f64>,

    surface: SurfaceSpec,

    /// Surface created by the first `render` attempt. Kept so a retried `render`
    /// draws into it instead of creating another one.
    surface_id: Option<SurfaceId>,

    ui_settings: UiSettings,

    /// The transport client. Created by `render`, closed by `destroy`.
    client: Option<H::Client>,

    /// Set once `render` succeeded.
    rendered: bool,

    /// Set once `destroy` has been called.
    destroyed: bool,

    /// Set when `play` has been asked for while not rendered yet.
    play_pending: bool,

    monitor: FrameMonitor,
}

/// Identify the playback-related state a `PlaybackAdapter` is in.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing has been loaded yet.
    Idle = 0,
    /// A source has been given to the client, which is not playing yet.
    Loading = 1,
    Playing = 2,
    Paused = 3,
    /// The client has been disconnected. Playing again reloads the source.
    Stopped = 4,
    /// End of the content. No transition leads here for now: live contents have
    /// no end the transport client reports.
    Ended = 5,
}

/// User interface affordances the playback asks the host framework for.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiSettings {
    left: Vec<String>,
    default: Vec<String>,
    right: Vec<String>,
    seek_enabled: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            left: vec!["playstop".to_owned()],
            default: vec!["seekbar".to_owned()],
            right: vec!["fullscreen".to_owned(), "volume".to_owned()],
            // the host hides the seekbar of live contents on its own
            seek_enabled: true,
        }
    }
}

#[wasm_bindgen]
impl UiSettings {
    /// Controls wanted on the left side of the media control bar.
    pub fn left(&self) -> Vec<String> {
        self.left.clone()
    }

    /// Controls wanted in the middle of the media control bar.
    pub fn default_controls(&self) -> Vec<String> {
        self.default.clone()
    }

    /// Controls wanted on the right side of the media control bar.
    pub fn right(&self) -> Vec<String> {
        self.right.clone()
    }

    pub fn seek_enabled(&self) -> bool {
        self.seek_enabled
    }

    pub fn has_seekbar(&self) -> bool {
        self.default.iter().any(|c| c == "seekbar")
    }
}

impl<H: PlaybackHost> PlaybackAdapter<H> {
    /// Create a new `PlaybackAdapter` and announce it through the `ready` event.
    ///
    /// With the `auto_play` option, playback starts once `render` has been called.
    pub fn new(options: PlaybackOptions, host: H) -> Self {
        let options = options.sanitized();
        let mut adapter = Self {
            host,
            status: PlaybackStatus::Idle,
            source: options.source().map(str::to_owned),
            duration: options.duration(),
            resume_at: options.resume_at(),
            muted: options.mute(),
            volume: None,
            surface: SurfaceSpec {
                width: options.surface_width(),
                height: options.surface_height(),
            },
            surface_id: None,
            ui_settings: UiSettings::default(),
            client: None,
            rendered: false,
            destroyed: false,
            play_pending: options.auto_play(),
            monitor: FrameMonitor::new(options.frame_monitor_interval()),
        };
        adapter.on_created();
        adapter
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.status != PlaybackStatus::Loading
    }

    pub fn ended(&self) -> bool {
        self.status == PlaybackStatus::Ended
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Last volume set, from `0.` to `1.`.
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Duration of the content in seconds, `0.` when unknown.
    pub fn duration(&self) -> f64 {
        self.duration.unwrap_or(0.)
    }

    /// Playback position in seconds. Always `0.` as live contents have no timeline.
    pub fn current_time(&self) -> f64 {
        0.
    }

    pub fn resume_at(&self) -> Option<f64> {
        self.resume_at
    }

    pub fn playback_type(&self) -> &'static str {
        LIVE_PLAYBACK_TYPE
    }

    pub fn ui_settings(&self) -> &UiSettings {
        &self.ui_settings
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns `true` while the frame monitor has a check scheduled.
    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_running()
    }
}

impl<H: PlaybackHost> Drop for PlaybackAdapter<H> {
    fn drop(&mut self) {
        if !self.destroyed {
            crate::Logger::warn("Playback: dropped without being destroyed, releasing client");
            self.release_resources();
        }
    }
}

/// Errors returned by the `PlaybackAdapter`'s methods.
///
/// A failing operation never changes the `PlaybackStatus`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Invalid source: {0}")]
    InvalidSource(#[from] SourceError),
    #[error("The playback has not been rendered yet.")]
    NotRendered,
    #[error("The playback has already been rendered.")]
    AlreadyRendered,
    #[error("The playback has been destroyed.")]
    Destroyed,
    #[error(transparent)]
    Host(#[from] HostError),
}

impl PlaybackError {
    /// Level at which this error is logged when reported to the JavaScript-side.
    ///
    /// Source errors were already logged when detected.
    pub fn log_level(&self) -> LoggerLevel {
        match self {
            PlaybackError::InvalidSource(_) => LoggerLevel::Debug,
            PlaybackError::Host(_) => LoggerLevel::Error,
            PlaybackError::NotRendered
            | PlaybackError::AlreadyRendered
            | PlaybackError::Destroyed => LoggerLevel::Warn,
        }
    }
}
