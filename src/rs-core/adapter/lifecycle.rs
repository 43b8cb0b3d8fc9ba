use super::{FrameCheck, PlaybackAdapter, PlaybackError, PlaybackStatus, PLAYBACK_NAME};
use crate::{
    bindings::{PlaybackEvent, TimerId, TimerReason},
    host::{PlaybackHost, TransportClient},
    source::{ConnectTarget, SourceError},
    Logger,
};

/// Volume, from `0` to `100`, used when `set_volume` receives no usable value.
const FALLBACK_VOLUME: f64 = 50.;

impl<H: PlaybackHost> PlaybackAdapter<H> {
    pub(super) fn on_created(&mut self) {
        Logger::lazy_info(&|| {
            format!(
                "Playback: created (source: {}, autoplay: {}, muted: {})",
                self.source.as_deref().unwrap_or("none"),
                self.play_pending,
                self.muted
            )
        });
        if let Some(resume_at) = self.resume_at {
            Logger::lazy_debug(&|| {
                format!("Playback: resume position {resume_at} ignored for live contents")
            });
        }
        self.host.trigger(PlaybackEvent::Ready, None);
    }

    /// Create the rendering surface and the transport client, then load the source
    /// the playback was constructed with.
    ///
    /// The client starts paused. If `play` was asked for before (e.g. through the
    /// `auto_play` option), playback starts right after.
    pub fn render(&mut self) -> Result<(), PlaybackError> {
        self.check_alive()?;
        if self.rendered {
            return Err(PlaybackError::AlreadyRendered);
        }

        let surface = match self.surface_id {
            Some(id) => id,
            None => {
                let id = self.host.create_surface(&self.surface)?;
                self.surface_id = Some(id);
                id
            }
        };
        let mut client = self.host.create_client(surface, "")?;
        client.set_audio_muted(self.muted);
        if let Some(volume) = self.volume {
            client.set_audio_volume(volume);
        }
        self.client = Some(client);
        self.rendered = true;
        Logger::debug("Playback: rendered");

        if let Some(source) = self.source.clone() {
            if let Err(err) = self.load(&source) {
                Logger::lazy_warn(&|| format!("Playback: could not load initial source: {err}"));
            }
        }
        self.hold_client();
        self.monitor.schedule(&mut self.host);

        if self.play_pending {
            self.play_pending = false;
            if let Err(err) = self.play() {
                Logger::lazy_warn(&|| format!("Playback: could not autoplay: {err}"));
            }
        }
        Ok(())
    }

    /// Point the transport client to `src`.
    ///
    /// The source is checked first: on an unusable source the error is reported
    /// and nothing changes.
    /// Before `render`, the source is only recorded, to be loaded on render, and
    /// `PlaybackError::NotRendered` is returned.
    pub fn load(&mut self, src: &str) -> Result<(), PlaybackError> {
        self.check_alive()?;
        let target = match ConnectTarget::resolve(src) {
            Ok(target) => target,
            Err(err) => return Err(self.on_source_error(err)),
        };
        if !self.rendered {
            self.source = Some(src.to_owned());
            return Err(PlaybackError::NotRendered);
        }

        Logger::lazy_info(&|| {
            format!(
                "Playback: loading {} (broadcast: \"{}\")",
                target.url(),
                target.broadcast_path()
            )
        });
        self.status = PlaybackStatus::Loading;
        self.source = Some(src.to_owned());
        if let Some(client) = self.client.as_mut() {
            client.set_broadcast_path(target.broadcast_path());
            client.set_connection_url(Some(target.url()));
        }
        self.host.trigger(PlaybackEvent::Loaded, Some(PLAYBACK_NAME));
        Ok(())
    }

    /// Start or resume playback.
    ///
    /// A playback which was stopped, or which never loaded anything, loads its
    /// source again first. Before `render`, playback is only scheduled to start
    /// once rendered.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        self.check_alive()?;
        if self.status == PlaybackStatus::Playing {
            return Ok(());
        }
        if !self.rendered {
            Logger::debug("Playback: play asked before render, deferring it");
            self.play_pending = true;
            return Ok(());
        }

        if matches!(self.status, PlaybackStatus::Idle | PlaybackStatus::Stopped) {
            let source = match self.source.clone() {
                Some(source) => source,
                None => return Err(self.on_source_error(SourceError::Empty)),
            };
            self.load(&source)?;
        }

        if let Some(client) = self.client.as_mut() {
            client.set_video_paused(false);
            client.set_audio_paused(false);
        }
        self.status = PlaybackStatus::Playing;
        self.host.trigger(PlaybackEvent::Play, None);
        Ok(())
    }

    /// Pause playback. Always succeeds, whatever the current status is.
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        self.check_alive()?;
        self.play_pending = false;
        self.status = PlaybackStatus::Paused;
        self.hold_client();
        self.host.trigger(PlaybackEvent::Pause, None);
        Ok(())
    }

    /// Disconnect the transport client. Only `play` (which reloads the source)
    /// resumes playback afterwards.
    pub fn stop(&mut self) -> Result<(), PlaybackError> {
        self.check_alive()?;
        self.play_pending = false;
        self.status = PlaybackStatus::Stopped;
        if let Some(client) = self.client.as_mut() {
            client.set_connection_url(None);
        }
        self.host.trigger(PlaybackEvent::Stop, None);
        Ok(())
    }

    pub fn mute(&mut self) -> Result<(), PlaybackError> {
        self.update_muted(true)
    }

    pub fn unmute(&mut self) -> Result<(), PlaybackError> {
        self.update_muted(false)
    }

    /// Update the volume, from `0` (which mutes) to `100`.
    ///
    /// Values outside of that range are clamped, `None` and `NaN` are replaced by
    /// `50`.
    pub fn set_volume(&mut self, value: Option<f64>) -> Result<(), PlaybackError> {
        self.check_alive()?;
        let value = value.filter(|v| !v.is_nan()).unwrap_or(FALLBACK_VOLUME);
        let fraction = value.clamp(0., 100.) / 100.;
        if fraction == 0. {
            self.mute()?;
        } else {
            self.unmute()?;
        }
        self.volume = Some(fraction);
        if let Some(client) = self.client.as_mut() {
            client.set_audio_volume(fraction);
        }
        Ok(())
    }

    /// Seeking is not possible in live contents, this is only logged.
    pub fn seek(&mut self, position: f64) -> Result<(), PlaybackError> {
        self.check_alive()?;
        Logger::lazy_debug(&|| format!("Playback: ignoring seek to {position}, content is live"));
        Ok(())
    }

    /// Stop playback and release the transport client as well as the frame
    /// monitor.
    ///
    /// Can be called at any time, including before `render`. Calling it again
    /// has no effect.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        Logger::info("Playback: destroying");
        if let Err(err) = self.stop() {
            Logger::lazy_warn(&|| format!("Playback: could not stop before destroy: {err}"));
        }
        self.release_resources();
        self.destroyed = true;
    }

    /// Method to call once a timer started by this adapter has ended.
    ///
    /// Returns the verdict of the frame check performed, if one was.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) -> Option<FrameCheck> {
        match reason {
            TimerReason::FrameMonitor => self.on_frame_monitor_timer(id),
        }
    }

    fn on_frame_monitor_timer(&mut self, id: TimerId) -> Option<FrameCheck> {
        if !self.monitor.take_timer(id) || self.destroyed {
            return None;
        }
        let client = self.client.as_ref()?;
        let frame = client.current_frame().and_then(|f| f.identity());
        let verdict = self.monitor.check(frame, self.status == PlaybackStatus::Playing);
        if verdict == FrameCheck::Stalled {
            Logger::warn("Playback: no new frame decoded since the last check, video may be stalled");
        }
        self.monitor.schedule(&mut self.host);
        Some(verdict)
    }

    /// Close the transport client, if one, and cancel the frame monitor.
    pub(super) fn release_resources(&mut self) {
        self.monitor.cancel(&mut self.host);
        self.play_pending = false;
        if let Some(client) = self.client.take() {
            client.close();
        }
    }

    fn update_muted(&mut self, muted: bool) -> Result<(), PlaybackError> {
        self.check_alive()?;
        if self.muted == muted {
            return Ok(());
        }
        self.muted = muted;
        if let Some(client) = self.client.as_mut() {
            client.set_audio_muted(muted);
        }
        let event = if muted {
            PlaybackEvent::Mute
        } else {
            PlaybackEvent::Unmute
        };
        self.host.trigger(event, None);
        Ok(())
    }

    /// Pause both media of the client, without any event nor status change.
    fn hold_client(&mut self) {
        if let Some(client) = self.client.as_mut() {
            client.set_video_paused(true);
            client.set_audio_paused(true);
        }
    }

    fn check_alive(&self) -> Result<(), PlaybackError> {
        if self.destroyed {
            Err(PlaybackError::Destroyed)
        } else {
            Ok(())
        }
    }

    /// Report an unusable source through the `error` event and convert it.
    fn on_source_error(&mut self, err: SourceError) -> PlaybackError {
        let err = PlaybackError::from(err);
        Logger::lazy_error(&|| format!("Playback: {err}"));
        self.host.trigger(PlaybackEvent::Error, Some(&err.to_string()));
        err
    }
}
