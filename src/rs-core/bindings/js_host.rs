use super::{
    jsClearTimer, jsCloseClient, jsCreateClient, jsCreateSurface, jsGetCurrentFrame,
    jsSetAudioMuted, jsSetAudioPaused, jsSetAudioVolume, jsSetBroadcastPath, jsSetConnectionUrl,
    jsSetVideoPaused, jsTimer, jsTrigger, ClientId, CreateClientErrorCode, CreateSurfaceErrorCode,
    FrameObservation, JsResult, PlaybackEvent, PlaybackId, SurfaceId, TimerId, TimerReason,
};
use crate::host::{HostError, PlaybackHost, SurfaceSpec, TransportClient};

/// `PlaybackHost` implementation relying on the JavaScript functions imported in
/// `js_functions`.
pub struct JsHost {
    playback_id: PlaybackId,
}

impl JsHost {
    pub(crate) fn new(playback_id: PlaybackId) -> Self {
        Self { playback_id }
    }
}

impl PlaybackHost for JsHost {
    type Client = JsClient;

    fn trigger(&mut self, event: PlaybackEvent, payload: Option<&str>) {
        jsTrigger(self.playback_id, event, payload);
    }

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, HostError> {
        jsCreateSurface(self.playback_id, spec.width, spec.height)
            .result()
            .map_err(|(code, desc)| {
                let message = desc.unwrap_or_else(|| match code {
                    CreateSurfaceErrorCode::NoContainer => "no container element".to_owned(),
                    CreateSurfaceErrorCode::UnknownError => "unknown error".to_owned(),
                });
                HostError::SurfaceCreation(message)
            })
    }

    fn create_client(
        &mut self,
        surface: SurfaceId,
        broadcast_path: &str,
    ) -> Result<JsClient, HostError> {
        let id = jsCreateClient(surface, broadcast_path)
            .result()
            .map_err(|(code, desc)| {
                let message = desc.unwrap_or_else(|| match code {
                    CreateClientErrorCode::SurfaceNotFound => "surface not found".to_owned(),
                    CreateClientErrorCode::LibraryUnavailable => {
                        "transport library unavailable".to_owned()
                    }
                    CreateClientErrorCode::UnknownError => "unknown error".to_owned(),
                });
                HostError::ClientCreation(message)
            })?;
        Ok(JsClient { id })
    }

    fn start_timer(&mut self, duration_ms: f64, reason: TimerReason) -> TimerId {
        jsTimer(self.playback_id, duration_ms, reason)
    }

    fn clear_timer(&mut self, id: TimerId) {
        jsClearTimer(id);
    }
}

/// Transport client living on the JavaScript-side, identified by its `ClientId`.
pub struct JsClient {
    id: ClientId,
}

impl TransportClient for JsClient {
    fn set_connection_url(&mut self, url: Option<&str>) {
        jsSetConnectionUrl(self.id, url);
    }

    fn set_broadcast_path(&mut self, path: &str) {
        jsSetBroadcastPath(self.id, path);
    }

    fn set_video_paused(&mut self, paused: bool) {
        jsSetVideoPaused(self.id, paused);
    }

    fn set_audio_paused(&mut self, paused: bool) {
        jsSetAudioPaused(self.id, paused);
    }

    fn set_audio_muted(&mut self, muted: bool) {
        jsSetAudioMuted(self.id, muted);
    }

    fn set_audio_volume(&mut self, volume: f64) {
        jsSetAudioVolume(self.id, volume);
    }

    fn current_frame(&self) -> Option<FrameObservation> {
        jsGetCurrentFrame(self.id)
    }

    fn close(self) {
        jsCloseClient(self.id);
    }
}
