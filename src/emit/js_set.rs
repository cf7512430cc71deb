//! JavaScript Set emitter

use super::registry::{EmitError, Emitter};

/// Emits a `const` declaration constructing a `Set` from an array literal.
///
/// Output is a single line of the form `const NAME = new Set(["A","B"]);`.
/// The underlying array preserves word order and duplicates; collapsing
/// duplicates is left to the Set constructor on the consuming side.
pub struct JsSetEmitter;

impl Emitter for JsSetEmitter {
    fn name(&self) -> &str {
        "js-set"
    }

    fn emit(&self, const_name: &str, words: &[String]) -> Result<String, EmitError> {
        let literal = serde_json::to_string(words)
            .map_err(|e| EmitError::SerializationError(e.to_string()))?;
        Ok(format!("const {const_name} = new Set({literal});"))
    }

    fn description(&self) -> &str {
        "JavaScript const declaration constructing a Set from an array literal"
    }
}
