mod js_functions;
mod js_host;
mod observations;

pub use js_functions::*;
pub(crate) use js_host::JsHost;
pub use observations::{FrameIdentity, FrameObservation};
