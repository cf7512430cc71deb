//! JavaScript array emitter

use super::registry::{EmitError, Emitter};

/// Emits a `const` declaration holding a JSON array literal.
///
/// Output is a single line of the form `const NAME = ["A","B"];`. The array
/// preserves word order and duplicates.
pub struct JsArrayEmitter;

impl Emitter for JsArrayEmitter {
    fn name(&self) -> &str {
        "js-array"
    }

    fn emit(&self, const_name: &str, words: &[String]) -> Result<String, EmitError> {
        let literal = serde_json::to_string(words)
            .map_err(|e| EmitError::SerializationError(e.to_string()))?;
        Ok(format!("const {const_name} = {literal};"))
    }

    fn description(&self) -> &str {
        "JavaScript const declaration holding an array literal"
    }
}
