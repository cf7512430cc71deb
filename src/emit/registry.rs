//! Emitter registry
//!
//! Provides a pluggable registry for generated-constant emitters. Each
//! emitter implements the [`Emitter`] trait and can be registered with
//! [`EmitterRegistry`] under its name.

use std::collections::HashMap;
use std::fmt;

/// Error that can occur during emission
#[derive(Debug, Clone, PartialEq)]
pub enum EmitError {
    /// Emitter not found in registry
    EmitterNotFound(String),
    /// Error while serializing the word sequence
    SerializationError(String),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::EmitterNotFound(name) => write!(f, "Emitter '{name}' not found"),
            EmitError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for EmitError {}

/// Trait for generated-constant emitters
///
/// Implementors render an ordered word sequence as a single-line source
/// declaration binding the given constant name.
pub trait Emitter: Send + Sync {
    /// The name of this emitter (e.g., "js-array", "js-set")
    fn name(&self) -> &str;

    /// Render the word sequence as a constant declaration
    fn emit(&self, const_name: &str, words: &[String]) -> Result<String, EmitError>;

    /// Optional description of this emitter
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of constant emitters
///
/// Provides a centralized registry for all available output shapes.
/// Emitters can be registered and retrieved by name.
pub struct EmitterRegistry {
    emitters: HashMap<String, Box<dyn Emitter>>,
}

impl EmitterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        EmitterRegistry {
            emitters: HashMap::new(),
        }
    }

    /// Register an emitter
    ///
    /// If an emitter with the same name already exists, it will be replaced.
    pub fn register<E: Emitter + 'static>(&mut self, emitter: E) {
        self.emitters
            .insert(emitter.name().to_string(), Box::new(emitter));
    }

    /// Get an emitter by name
    pub fn get(&self, name: &str) -> Option<&dyn Emitter> {
        self.emitters.get(name).map(|e| e.as_ref())
    }

    /// Check if an emitter exists
    pub fn has(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// Render a word sequence using the named emitter
    pub fn emit(
        &self,
        name: &str,
        const_name: &str,
        words: &[String],
    ) -> Result<String, EmitError> {
        let emitter = self
            .get(name)
            .ok_or_else(|| EmitError::EmitterNotFound(name.to_string()))?;
        emitter.emit(const_name, words)
    }

    /// List all available emitter names (sorted)
    pub fn list_emitters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.emitters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default emitters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in emitters
        registry.register(super::JsArrayEmitter);
        registry.register(super::JsSetEmitter);

        registry
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
