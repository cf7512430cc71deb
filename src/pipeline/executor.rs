//! Pipeline executor that runs named configurations

use crate::emit::EmitterRegistry;
use crate::loader;
use crate::pipeline::config::{ConfigRegistry, PipelineConfig};
use crate::transform;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Errors during pipeline execution
///
/// One coarse error boundary covers the whole run; any stage failure maps
/// into a variant here and aborts the run.
#[derive(Debug, Clone)]
pub enum PipelineError {
    ConfigNotFound(String),
    Read { path: PathBuf, message: String },
    Emit(String),
    Write { path: PathBuf, message: String },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::ConfigNotFound(name) => write!(f, "Pipeline '{}' not found", name),
            PipelineError::Read { path, message } => {
                write!(f, "cannot read '{}': {}", path.display(), message)
            }
            PipelineError::Emit(msg) => write!(f, "emit failed: {}", msg),
            PipelineError::Write { path, message } => {
                write!(f, "cannot write '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Outcome of a successful pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PathBuf,
    pub word_count: usize,
    report_count: bool,
}

impl RunReport {
    /// Single-line success message for console reporting
    pub fn success_message(&self) -> String {
        if self.report_count {
            format!(
                "Successfully created {} with {} words.",
                self.output.display(),
                self.word_count
            )
        } else {
            format!("Successfully created {}", self.output.display())
        }
    }
}

/// Executes pipeline configurations
pub struct PipelineExecutor {
    configs: ConfigRegistry,
    emitters: EmitterRegistry,
}

impl PipelineExecutor {
    /// Create an executor with the standard pipelines and emitters
    pub fn new() -> Self {
        Self {
            configs: ConfigRegistry::with_defaults(),
            emitters: EmitterRegistry::with_defaults(),
        }
    }

    /// Create an executor with custom registries
    pub fn with_registries(configs: ConfigRegistry, emitters: EmitterRegistry) -> Self {
        Self { configs, emitters }
    }

    /// The configuration registry backing this executor
    pub fn configs(&self) -> &ConfigRegistry {
        &self.configs
    }

    /// Run a named pipeline
    pub fn run(&self, name: &str) -> Result<RunReport, PipelineError> {
        let config = self
            .configs
            .get(name)
            .ok_or_else(|| PipelineError::ConfigNotFound(name.to_string()))?;
        self.run_config(config)
    }

    /// Run a pipeline configuration: load, transform, emit, write
    ///
    /// The output file is only opened for the final write, so a failure in
    /// any earlier stage leaves the destination untouched.
    pub fn run_config(&self, config: &PipelineConfig) -> Result<RunReport, PipelineError> {
        // Step 1: Load the word list
        let words = loader::load_words(&config.input).map_err(|e| PipelineError::Read {
            path: config.input.clone(),
            message: e.to_string(),
        })?;

        // Step 2: Apply transforms in order
        let words = transform::apply(words, &config.transforms);

        // Step 3: Render the generated constant
        let rendered = self
            .emitters
            .emit(&config.emitter, &config.const_name, &words)
            .map_err(|e| PipelineError::Emit(e.to_string()))?;

        // Step 4: Overwrite the output file in a single write
        fs::write(&config.output, rendered).map_err(|e| PipelineError::Write {
            path: config.output.clone(),
            message: e.to_string(),
        })?;

        Ok(RunReport {
            output: config.output.clone(),
            word_count: words.len(),
            report_count: config.report_count,
        })
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}
