//! Per-word transformations
//!
//! A pipeline carries an ordered list of [`TransformSpec`] steps that run
//! between loading and emission. Steps apply strictly in the order given:
//! the standard validation pipeline filters by length before converting
//! case, and that order is kept even though uppercasing does not change
//! character counts today.

/// A single transformation step applied to the word sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformSpec {
    /// Convert every word to uppercase.
    Uppercase,

    /// Keep only words with at least this many characters.
    ///
    /// Length is counted in characters (code points), evaluated on the
    /// word as loaded, before any case conversion.
    MinLength(usize),
}

/// Apply transformation steps to the word sequence, in order.
///
/// Word order is preserved and duplicates are kept; `MinLength` only
/// removes entries, it never reorders them.
pub fn apply(words: Vec<String>, specs: &[TransformSpec]) -> Vec<String> {
    specs.iter().fold(words, |words, spec| match spec {
        TransformSpec::Uppercase => words.into_iter().map(|word| word.to_uppercase()).collect(),
        TransformSpec::MinLength(min) => words
            .into_iter()
            .filter(|word| word.chars().count() >= *min)
            .collect(),
    })
}
