use crate::{
    adapter::{PlaybackAdapter, PlaybackError},
    bindings::JsHost,
    wasm_bindgen, JsValue, Logger, LoggerLevel,
};

mod api;
mod event_listeners;

/// The `HangPlayback` is the playback plugin interface exported to the JavaScript-side.
///
/// The JavaScript playback class of the host player framework owns one and forwards
/// its lifecycle calls to it. Effects on the page (surface and transport client
/// creation, events on the framework's bus, timers) go through the functions
/// declared in `bindings`.
#[wasm_bindgen]
pub struct HangPlayback {
    adapter: PlaybackAdapter<JsHost>,
}

/// Log an error, then convert it to the value thrown on the JavaScript-side.
fn to_js_error(err: PlaybackError) -> JsValue {
    let message = || format!("Playback: {err}");
    match err.log_level() {
        LoggerLevel::Error => Logger::lazy_error(&message),
        LoggerLevel::Warn => Logger::lazy_warn(&message),
        LoggerLevel::Info => Logger::lazy_info(&message),
        LoggerLevel::Debug => Logger::lazy_debug(&message),
        LoggerLevel::None => {}
    }
    JsValue::from_str(&err.to_string())
}
