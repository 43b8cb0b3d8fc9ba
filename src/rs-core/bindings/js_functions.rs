use crate::wasm_bindgen;
use std::fmt;

use super::FrameObservation;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.
///
/// Every function concerning a single `HangPlayback` takes the `PlaybackId` given to it
/// at construction, so the JavaScript-side can route the call to the right player
/// container.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration` argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since with
    // the `TimerId` returned by this function, the `on_timer_ended` method of the
    // `HangPlayback` identified by `playback_id` will be called with both the
    // corresponding `TimerId` and `reason`.
    pub fn jsTimer(playback_id: PlaybackId, duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(id: TimerId);

    // Emit the given event on the host player framework's event bus, through the
    // playback plugin linked to `playback_id`.
    //
    // `payload` is only set for events carrying a value (`loaded` and `error`).
    pub fn jsTrigger(playback_id: PlaybackId, event: PlaybackEvent, payload: Option<&str>);

    // Create a `<canvas>` element inside the container element of the playback plugin
    // linked to `playback_id`.
    //
    // Width and height, in CSS pixels, are only set when defined.
    pub fn jsCreateSurface(
        playback_id: PlaybackId,
        width: Option<u32>,
        height: Option<u32>,
    ) -> CreateSurfaceResult;

    // Construct a new transport client (the `hang` watch object), rendering into the
    // surface created through `jsCreateSurface` and subscribing to `broadcast_path`.
    //
    // The client doesn't connect anywhere until `jsSetConnectionUrl` is called with a
    // defined URL.
    pub fn jsCreateClient(surface_id: SurfaceId, broadcast_path: &str) -> CreateClientResult;

    // Update the connection target of the client. `None` disconnects it.
    pub fn jsSetConnectionUrl(client_id: ClientId, url: Option<&str>);

    // Update the name of the broadcast the client subscribes to.
    pub fn jsSetBroadcastPath(client_id: ClientId, path: &str);

    pub fn jsSetVideoPaused(client_id: ClientId, paused: bool);

    pub fn jsSetAudioPaused(client_id: ClientId, paused: bool);

    pub fn jsSetAudioMuted(client_id: ClientId, muted: bool);

    // Update the audio volume of the client, from `0.` (silent) to `1.` (full volume).
    pub fn jsSetAudioVolume(client_id: ClientId, volume: f64);

    // Describe the last frame decoded by the client.
    //
    // Returns `None` if no frame has been decoded yet.
    pub fn jsGetCurrentFrame(client_id: ClientId) -> Option<FrameObservation>;

    // Close the client, releasing its connection and decoding resources.
    //
    // The `ClientId` must not be used after this call.
    pub fn jsCloseClient(client_id: ClientId);
}

/// Events that may be emitted on the host framework's event bus.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The playback has been constructed and can receive calls.
    Ready = 0,
    /// A source has been given to the transport client. Carries the playback's name.
    Loaded = 1,
    Play = 2,
    Pause = 3,
    Stop = 4,
    Mute = 5,
    Unmute = 6,
    /// A configuration error happened (e.g. an unusable source). Carries the
    /// error message.
    Error = 7,
}

impl PlaybackEvent {
    /// Name under which that event is known by the host framework.
    pub fn name(self) -> &'static str {
        match self {
            PlaybackEvent::Ready => "ready",
            PlaybackEvent::Loaded => "loaded",
            PlaybackEvent::Play => "play",
            PlaybackEvent::Pause => "pause",
            PlaybackEvent::Stop => "stop",
            PlaybackEvent::Mute => "mute",
            PlaybackEvent::Unmute => "unmute",
            PlaybackEvent::Error => "error",
        }
    }
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// "Reason" associated to a timer started by the `HangPlayback`.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The timer is linked to the periodic check of the last decoded frame.
    FrameMonitor = 0,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Identify a `HangPlayback` instance on the JavaScript-side.
pub type PlaybackId = u32;

/// Identify a pending timer.
pub type TimerId = f64;

/// Identify a rendering surface created through `jsCreateSurface`.
pub type SurfaceId = u32;

/// Identify a transport client created through `jsCreateClient`.
pub type ClientId = u32;

/// Trait allowing to convert "JavaScript Results" as exposed by the JavaScript functions into
/// `Result` structs more idiomatic to Rust.
pub(crate) trait JsResult<T, E> {
    fn result(self) -> Result<T, (E, Option<String>)>;
}

/// Errors that can arise when creating a rendering surface.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateSurfaceErrorCode {
    /// No container element is known for the given `PlaybackId`.
    NoContainer,

    /// An unknown error arised.
    UnknownError,
}

/// Result of calling the `jsCreateSurface` JavaScript function.
///
/// Creation of a `CreateSurfaceResult` should only be performed by the JavaScript side
/// through the exposed static constructors.
#[wasm_bindgen]
pub struct CreateSurfaceResult {
    surface_id: SurfaceId,
    error: Option<(CreateSurfaceErrorCode, Option<String>)>,
}

#[wasm_bindgen]
impl CreateSurfaceResult {
    /// Creates a `CreateSurfaceResult` indicating success, with the corresponding
    /// `SurfaceId`.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn success(surface_id: SurfaceId) -> Self {
        Self {
            surface_id,
            error: None,
        }
    }

    /// Creates a `CreateSurfaceResult` indicating failure, with the corresponding
    /// error.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn error(err: CreateSurfaceErrorCode, desc: Option<String>) -> Self {
        Self {
            surface_id: 0,
            error: Some((err, desc)),
        }
    }
}

impl JsResult<SurfaceId, CreateSurfaceErrorCode> for CreateSurfaceResult {
    fn result(self) -> Result<SurfaceId, (CreateSurfaceErrorCode, Option<String>)> {
        if let Some(err) = self.error {
            Err(err)
        } else {
            Ok(self.surface_id)
        }
    }
}

/// Errors that can arise when constructing a transport client.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateClientErrorCode {
    /// The `SurfaceId` given is not linked to any surface.
    SurfaceNotFound,

    /// The transport library is not loaded (e.g. its custom element is not
    /// registered yet).
    LibraryUnavailable,

    /// An unknown error arised.
    UnknownError,
}

/// Result of calling the `jsCreateClient` JavaScript function.
///
/// Creation of a `CreateClientResult` should only be performed by the JavaScript side
/// through the exposed static constructors.
#[wasm_bindgen]
pub struct CreateClientResult {
    client_id: ClientId,
    error: Option<(CreateClientErrorCode, Option<String>)>,
}

#[wasm_bindgen]
impl CreateClientResult {
    /// Creates a `CreateClientResult` indicating success, with the corresponding
    /// `ClientId`.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn success(client_id: ClientId) -> Self {
        Self {
            client_id,
            error: None,
        }
    }

    /// Creates a `CreateClientResult` indicating failure, with the corresponding
    /// error.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn error(err: CreateClientErrorCode, desc: Option<String>) -> Self {
        Self {
            client_id: 0,
            error: Some((err, desc)),
        }
    }
}

impl JsResult<ClientId, CreateClientErrorCode> for CreateClientResult {
    fn result(self) -> Result<ClientId, (CreateClientErrorCode, Option<String>)> {
        if let Some(err) = self.error {
            Err(err)
        } else {
            Ok(self.client_id)
        }
    }
}
