//! Emitters that render a processed word sequence as a source-code constant
//!
//! Each emitter implements the [`Emitter`] trait and is registered with
//! [`EmitterRegistry`] under a short name. Pipelines refer to emitters by
//! name, so new output shapes can be added without touching the executor.

pub mod js_array;
pub mod js_set;
pub mod registry;

pub use js_array::JsArrayEmitter;
pub use js_set::JsSetEmitter;
pub use registry::{EmitError, Emitter, EmitterRegistry};
