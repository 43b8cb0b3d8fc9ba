use wasm_bindgen::prelude::*;

pub mod adapter;
pub mod bindings;
pub mod host;
pub mod options;
pub mod playback;
pub mod source;
mod utils;

pub use utils::logger::{set_log_level, Logger, LoggerLevel};
