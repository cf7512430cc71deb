//! Pipeline configuration system
//!
//! This module defines named configurations that specify:
//! 1. Which word list file to read
//! 2. Which transforms to apply, in order
//! 3. Which emitter renders the result, and to which output file

use crate::transform::TransformSpec;
use std::collections::HashMap;
use std::path::PathBuf;

/// A named configuration describing one word list pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    /// Word list to read, one word per line
    pub input: PathBuf,
    /// Generated file, overwritten on every run
    pub output: PathBuf,
    /// Identifier bound in the generated declaration
    pub const_name: String,
    /// Emitter name, resolved against the emitter registry
    pub emitter: String,
    /// Transform steps, applied strictly in order
    pub transforms: Vec<TransformSpec>,
    /// Whether the success message includes the processed word count
    pub report_count: bool,
}

/// Registry of pipeline configurations
pub struct ConfigRegistry {
    configs: HashMap<String, PipelineConfig>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration
    pub fn register(&mut self, config: PipelineConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    /// Get a configuration by name
    pub fn get(&self, name: &str) -> Option<&PipelineConfig> {
        self.configs.get(name)
    }

    /// Check if a configuration exists
    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all configurations (sorted by name)
    pub fn list_configs(&self) -> Vec<&PipelineConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create a registry with the standard pipelines
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(PipelineConfig {
            name: "dictionary".to_string(),
            description: "Game dictionary: every word uppercased into an array literal"
                .to_string(),
            input: PathBuf::from("google-10000-english-usa-no-swears.txt"),
            output: PathBuf::from("dictionary.js"),
            const_name: "DICTIONARY".to_string(),
            emitter: "js-array".to_string(),
            transforms: vec![TransformSpec::Uppercase],
            report_count: false,
        });

        registry.register(PipelineConfig {
            name: "validation".to_string(),
            description: "Validation dictionary: words of 4+ characters uppercased into a Set"
                .to_string(),
            input: PathBuf::from("words_alpha.txt"),
            output: PathBuf::from("all_words.js"),
            const_name: "VALIDATION_DICT".to_string(),
            emitter: "js-set".to_string(),
            // Length filter runs before case conversion
            transforms: vec![TransformSpec::MinLength(4), TransformSpec::Uppercase],
            report_count: true,
        });

        registry
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_both_pipelines() {
        let registry = ConfigRegistry::with_defaults();
        assert!(registry.has("dictionary"));
        assert!(registry.has("validation"));
        assert_eq!(registry.list_configs().len(), 2);
    }

    #[test]
    fn dictionary_pipeline_uppercases_into_an_array() {
        let registry = ConfigRegistry::with_defaults();
        let config = registry.get("dictionary").unwrap();

        assert_eq!(config.input, PathBuf::from("google-10000-english-usa-no-swears.txt"));
        assert_eq!(config.output, PathBuf::from("dictionary.js"));
        assert_eq!(config.const_name, "DICTIONARY");
        assert_eq!(config.emitter, "js-array");
        assert_eq!(config.transforms, vec![TransformSpec::Uppercase]);
        assert!(!config.report_count);
    }

    #[test]
    fn validation_pipeline_filters_before_uppercasing() {
        let registry = ConfigRegistry::with_defaults();
        let config = registry.get("validation").unwrap();

        assert_eq!(config.input, PathBuf::from("words_alpha.txt"));
        assert_eq!(config.output, PathBuf::from("all_words.js"));
        assert_eq!(config.const_name, "VALIDATION_DICT");
        assert_eq!(config.emitter, "js-set");
        assert_eq!(
            config.transforms,
            vec![TransformSpec::MinLength(4), TransformSpec::Uppercase]
        );
        assert!(config.report_count);
    }

    #[test]
    fn list_configs_is_sorted_by_name() {
        let registry = ConfigRegistry::with_defaults();
        let names: Vec<_> = registry.list_configs().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["dictionary", "validation"]);
    }
}
