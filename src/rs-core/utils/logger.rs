use std::sync::atomic::{AtomicU8, Ordering};

use crate::{bindings::LogLevel, wasm_bindgen};

static MAX_LOG_LEVEL: AtomicU8 = AtomicU8::new(LoggerLevel::Debug as u8);

/// Maximum level of the logs that will be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LoggerLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

/// Update the maximum level of logs emitted by every `HangPlayback` instance.
#[wasm_bindgen]
pub fn set_log_level(level: LoggerLevel) {
    Logger::set_logger_level(level);
}

pub struct Logger {}

impl Logger {
    pub fn set_logger_level(new_level: LoggerLevel) {
        MAX_LOG_LEVEL.store(new_level as u8, Ordering::Relaxed);
    }

    #[inline(always)]
    fn is_enabled(level: LoggerLevel) -> bool {
        MAX_LOG_LEVEL.load(Ordering::Relaxed) >= level as u8
    }

    pub fn error(text: &str) {
        if Self::is_enabled(LoggerLevel::Error) {
            emit(LogLevel::Error, text);
        }
    }

    pub fn warn(text: &str) {
        if Self::is_enabled(LoggerLevel::Warn) {
            emit(LogLevel::Warn, text);
        }
    }

    pub fn info(text: &str) {
        if Self::is_enabled(LoggerLevel::Info) {
            emit(LogLevel::Info, text);
        }
    }

    pub fn debug(text: &str) {
        if Self::is_enabled(LoggerLevel::Debug) {
            emit(LogLevel::Debug, text);
        }
    }

    pub fn lazy_error(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Error) {
            emit(LogLevel::Error, &func());
        }
    }

    pub fn lazy_warn(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Warn) {
            emit(LogLevel::Warn, &func());
        }
    }

    pub fn lazy_info(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Info) {
            emit(LogLevel::Info, &func());
        }
    }

    pub fn lazy_debug(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Debug) {
            emit(LogLevel::Debug, &func());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, text: &str) {
    crate::bindings::jsLog(level, text);
}

/// Native targets have no `jsLog`: logs are emitted as `tracing` events.
#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, text: &str) {
    match level {
        LogLevel::Error => tracing::error!(target: "hang_playback", "{text}"),
        LogLevel::Warn => tracing::warn!(target: "hang_playback", "{text}"),
        LogLevel::Info => tracing::info!(target: "hang_playback", "{text}"),
        LogLevel::Debug => tracing::debug!(target: "hang_playback", "{text}"),
    }
}
