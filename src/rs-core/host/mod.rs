//! Contracts of the collaborators a `PlaybackAdapter` relies on.
//!
//! The adapter never creates DOM elements, connects anywhere or decodes anything
//! itself: it asks a `PlaybackHost` to do it and drives the resulting
//! `TransportClient`.

use thiserror::Error;

use crate::bindings::{FrameObservation, PlaybackEvent, SurfaceId, TimerId, TimerReason};

#[cfg(test)]
pub(crate) mod mock;

/// Size wanted for the rendering surface, in CSS pixels.
///
/// `None` dimensions are left to the host's styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The environment of a `PlaybackAdapter`: the host player framework's event bus,
/// its container element and its scheduling primitives.
pub trait PlaybackHost {
    type Client: TransportClient;

    /// Emit `event` on the host framework's event bus.
    fn trigger(&mut self, event: PlaybackEvent, payload: Option<&str>);

    /// Create a drawable surface inside the playback's container.
    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, HostError>;

    /// Construct a transport client rendering into `surface`.
    ///
    /// The client stays disconnected until its connection URL is set.
    fn create_client(
        &mut self,
        surface: SurfaceId,
        broadcast_path: &str,
    ) -> Result<Self::Client, HostError>;

    /// Start a one-shot timer. Its expiry is reported back through the adapter's
    /// `on_timer_ended` method.
    fn start_timer(&mut self, duration_ms: f64, reason: TimerReason) -> TimerId;

    fn clear_timer(&mut self, id: TimerId);
}

/// Handle to the external transport and decoding object.
///
/// `close` consumes the handle so nothing can be done with it once released.
pub trait TransportClient {
    /// Update where the client connects to. `None` disconnects it.
    fn set_connection_url(&mut self, url: Option<&str>);

    fn set_broadcast_path(&mut self, path: &str);

    fn set_video_paused(&mut self, paused: bool);

    fn set_audio_paused(&mut self, paused: bool);

    fn set_audio_muted(&mut self, muted: bool);

    /// `volume` goes from `0.` to `1.`.
    fn set_audio_volume(&mut self, volume: f64);

    /// Describe the frame decoded last, `None` if there's none yet.
    fn current_frame(&self) -> Option<FrameObservation>;

    fn close(self);
}

/// Errors reported by a `PlaybackHost` when it cannot provide a resource.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    #[error("Could not create the rendering surface: {0}")]
    SurfaceCreation(String),
    #[error("Could not create the transport client: {0}")]
    ClientCreation(String),
}
