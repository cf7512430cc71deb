//! Named word list pipelines
//!
//! A pipeline configuration names an input word list, an ordered list of
//! transforms, an emitter, and an output file. The executor runs a
//! configuration end to end: load, transform, emit, write.

pub mod config;
pub mod executor;

pub use config::{ConfigRegistry, PipelineConfig};
pub use executor::{PipelineError, PipelineExecutor, RunReport};
