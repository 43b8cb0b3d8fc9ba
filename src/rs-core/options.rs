use crate::{wasm_bindgen, Logger};

/// Default period, in milliseconds, at which the last decoded frame is checked.
pub const DEFAULT_FRAME_MONITOR_INTERVAL: f64 = 1000.;

/// Options a `HangPlayback` is constructed with, mirroring the options the host
/// player framework gives to its playback plugins.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackOptions {
    /// Resource to play. See `ConnectTarget::resolve` for the accepted formats.
    source: Option<String>,

    /// If `true`, playback starts as soon as the playback has been rendered.
    auto_play: bool,

    /// Initial mute state.
    mute: bool,

    /// Position, in seconds, playback should resume at.
    ///
    /// Only recorded: live contents cannot be seeked into.
    resume_at: Option<f64>,

    /// Duration of the content in seconds, when the host knows it.
    duration: Option<f64>,

    /// Width in CSS pixels of the rendering surface. Left to styling if `None`.
    surface_width: Option<u32>,

    /// Height in CSS pixels of the rendering surface. Left to styling if `None`.
    surface_height: Option<u32>,

    /// Period in milliseconds of the frame-freeze check.
    frame_monitor_interval: f64,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            source: None,
            auto_play: false,
            mute: false,
            resume_at: None,
            duration: None,
            surface_width: None,
            surface_height: None,
            frame_monitor_interval: DEFAULT_FRAME_MONITOR_INTERVAL,
        }
    }
}

/// Setters exposed to the JavaScript-side.
#[wasm_bindgen]
impl PlaybackOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    pub fn set_auto_play(&mut self, auto_play: bool) {
        self.auto_play = auto_play;
    }

    pub fn set_mute(&mut self, mute: bool) {
        self.mute = mute;
    }

    pub fn set_resume_at(&mut self, resume_at: Option<f64>) {
        self.resume_at = resume_at;
    }

    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration = duration;
    }

    pub fn set_surface_size(&mut self, width: Option<u32>, height: Option<u32>) {
        self.surface_width = width;
        self.surface_height = height;
    }

    pub fn set_frame_monitor_interval(&mut self, interval_ms: f64) {
        self.frame_monitor_interval = interval_ms;
    }
}

impl PlaybackOptions {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_mute(mut self, mute: bool) -> Self {
        self.mute = mute;
        self
    }

    pub fn with_resume_at(mut self, resume_at: f64) -> Self {
        self.resume_at = Some(resume_at);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_surface_size(mut self, width: u32, height: u32) -> Self {
        self.surface_width = Some(width);
        self.surface_height = Some(height);
        self
    }

    pub fn with_frame_monitor_interval(mut self, interval_ms: f64) -> Self {
        self.frame_monitor_interval = interval_ms;
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn mute(&self) -> bool {
        self.mute
    }

    pub fn resume_at(&self) -> Option<f64> {
        self.resume_at
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn surface_width(&self) -> Option<u32> {
        self.surface_width
    }

    pub fn surface_height(&self) -> Option<u32> {
        self.surface_height
    }

    pub fn frame_monitor_interval(&self) -> f64 {
        self.frame_monitor_interval
    }

    /// Drop values which cannot be used as is, logging a warning for each.
    ///
    /// Positions and durations must be finite and positive, the monitor interval
    /// strictly positive, and an empty source is the same as no source.
    pub(crate) fn sanitized(mut self) -> Self {
        if self.source.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.source = None;
        }
        if let Some(duration) = self.duration.filter(|d| !is_valid_seconds(*d)) {
            Logger::lazy_warn(&|| format!("Options: ignoring invalid duration {duration}"));
            self.duration = None;
        }
        if let Some(resume_at) = self.resume_at.filter(|r| !is_valid_seconds(*r)) {
            Logger::lazy_warn(&|| format!("Options: ignoring invalid resume position {resume_at}"));
            self.resume_at = None;
        }
        let interval = self.frame_monitor_interval;
        if !(interval.is_finite() && interval > 0.) {
            Logger::lazy_warn(&|| {
                format!("Options: invalid frame monitor interval {interval}, using the default")
            });
            self.frame_monitor_interval = DEFAULT_FRAME_MONITOR_INTERVAL;
        }
        self
    }
}

fn is_valid_seconds(val: f64) -> bool {
    val.is_finite() && val >= 0.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PlaybackOptions::new();
        assert_eq!(options.source(), None);
        assert!(!options.auto_play());
        assert!(!options.mute());
        assert_eq!(options.duration(), None);
        assert_eq!(options.frame_monitor_interval(), DEFAULT_FRAME_MONITOR_INTERVAL);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let options = PlaybackOptions::default()
            .with_source("http://x/demo.hang")
            .with_duration(12.5)
            .with_resume_at(0.)
            .with_frame_monitor_interval(250.);
        assert_eq!(options.clone().sanitized(), options);
    }

    #[test]
    fn test_sanitized_drops_invalid_values() {
        let options = PlaybackOptions::default()
            .with_source("  ")
            .with_duration(f64::INFINITY)
            .with_resume_at(-3.)
            .with_frame_monitor_interval(0.)
            .sanitized();
        assert_eq!(options.source(), None);
        assert_eq!(options.duration(), None);
        assert_eq!(options.resume_at(), None);
        assert_eq!(options.frame_monitor_interval(), DEFAULT_FRAME_MONITOR_INTERVAL);
    }
}
