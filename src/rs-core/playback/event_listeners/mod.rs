use super::HangPlayback;
use crate::{
    bindings::{TimerId, TimerReason},
    wasm_bindgen,
};

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl HangPlayback {
    /// The JS code should call this method each time a timer started with the `jsTimer`
    /// function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` given by `jsTimer` when the timer was
    ///   started. This allows the `HangPlayback` to identify which timer
    ///   actually finished.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer
    ///   was started.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        self.adapter.on_timer_ended(id, reason);
    }
}
