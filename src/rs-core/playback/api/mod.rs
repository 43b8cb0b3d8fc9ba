use super::{to_js_error, HangPlayback};
use crate::{
    adapter::{PlaybackAdapter, PlaybackStatus, UiSettings, PLAYBACK_NAME},
    bindings::{JsHost, PlaybackId},
    options::PlaybackOptions,
    source, wasm_bindgen, JsValue,
};

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which, as its name points at, should be called when
/// particular events happen. Such "event_listeners" are defined in their own file.
///
/// Methods returning a `Result` throw on the JavaScript-side when failing.
#[wasm_bindgen]
impl HangPlayback {
    /// Create a new `HangPlayback`, which directly emits the `ready` event.
    ///
    /// # Arguments
    ///
    /// * `options` - The options given by the host framework to its playback.
    ///
    /// * `playback_id` - Identifier the JavaScript-side uses to route the calls of
    ///   this `HangPlayback` to the right container, event bus and timers.
    #[wasm_bindgen(constructor)]
    pub fn new(options: PlaybackOptions, playback_id: PlaybackId) -> Self {
        Self {
            adapter: PlaybackAdapter::new(options, JsHost::new(playback_id)),
        }
    }

    /// Returns `true` if the resource given can be played by a `HangPlayback`,
    /// based on its extension, scheme or media type.
    pub fn can_play(resource: &str, mime_type: Option<String>) -> bool {
        source::can_play(resource, mime_type.as_deref())
    }

    pub fn name(&self) -> String {
        PLAYBACK_NAME.to_owned()
    }

    /// The transport client renders video the way an HTML5 video element would.
    pub fn is_html5_video(&self) -> bool {
        true
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        self.adapter.render().map_err(to_js_error)
    }

    pub fn load(&mut self, src: &str) -> Result<(), JsValue> {
        self.adapter.load(src).map_err(to_js_error)
    }

    pub fn play(&mut self) -> Result<(), JsValue> {
        self.adapter.play().map_err(to_js_error)
    }

    pub fn pause(&mut self) -> Result<(), JsValue> {
        self.adapter.pause().map_err(to_js_error)
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        self.adapter.stop().map_err(to_js_error)
    }

    pub fn mute(&mut self) -> Result<(), JsValue> {
        self.adapter.mute().map_err(to_js_error)
    }

    pub fn unmute(&mut self) -> Result<(), JsValue> {
        self.adapter.unmute().map_err(to_js_error)
    }

    /// Update the volume, from `0` to `100`. `0` mutes.
    pub fn volume(&mut self, value: Option<f64>) -> Result<(), JsValue> {
        self.adapter.set_volume(value).map_err(to_js_error)
    }

    pub fn seek(&mut self, position: f64) -> Result<(), JsValue> {
        self.adapter.seek(position).map_err(to_js_error)
    }

    pub fn destroy(&mut self) {
        self.adapter.destroy();
    }

    pub fn status(&self) -> PlaybackStatus {
        self.adapter.status()
    }

    pub fn is_ready(&self) -> bool {
        self.adapter.is_ready()
    }

    pub fn ended(&self) -> bool {
        self.adapter.ended()
    }

    pub fn is_playing(&self) -> bool {
        self.adapter.is_playing()
    }

    pub fn is_muted(&self) -> bool {
        self.adapter.is_muted()
    }

    pub fn get_duration(&self) -> f64 {
        self.adapter.duration()
    }

    pub fn get_current_time(&self) -> f64 {
        self.adapter.current_time()
    }

    pub fn get_playback_type(&self) -> String {
        self.adapter.playback_type().to_owned()
    }

    pub fn settings(&self) -> UiSettings {
        self.adapter.ui_settings().clone()
    }
}
