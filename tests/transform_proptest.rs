//! Property-based tests for the word pipeline stages
//!
//! These generate arbitrary word list text and check the invariants the
//! generated constants rely on: entries are trimmed and uppercase, counts
//! match the surviving input lines, and order is never disturbed.

use dictgen::loader::split_words;
use dictgen::transform::{apply, TransformSpec};
use proptest::prelude::*;

/// Generate a single word list line: a word with optional surrounding whitespace
fn line_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[ \t]{0,3}").unwrap(),
        prop::string::string_regex("[a-zA-Z]{0,12}").unwrap(),
        prop::string::string_regex("[ \t]{0,3}").unwrap(),
    )
        .prop_map(|(lead, word, trail)| format!("{lead}{word}{trail}"))
}

/// Generate word list text: lines joined by newlines, some blank
fn word_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn loaded_words_are_trimmed_and_non_empty(source in word_list_strategy()) {
        for word in split_words(&source) {
            prop_assert!(!word.is_empty());
            prop_assert_eq!(word.trim(), word.as_str());
        }
    }

    #[test]
    fn loaded_count_matches_non_blank_lines(source in word_list_strategy()) {
        let expected = source.lines().filter(|line| !line.trim().is_empty()).count();
        prop_assert_eq!(split_words(&source).len(), expected);
    }

    #[test]
    fn uppercase_leaves_no_lowercase_characters(source in word_list_strategy()) {
        let words = apply(split_words(&source), &[TransformSpec::Uppercase]);
        for word in words {
            prop_assert!(!word.chars().any(|c| c.is_lowercase()));
        }
    }

    #[test]
    fn uppercase_preserves_count_and_order(source in word_list_strategy()) {
        let loaded = split_words(&source);
        let upper = apply(loaded.clone(), &[TransformSpec::Uppercase]);

        prop_assert_eq!(upper.len(), loaded.len());
        for (original, transformed) in loaded.iter().zip(&upper) {
            prop_assert_eq!(&original.to_uppercase(), transformed);
        }
    }

    #[test]
    fn min_length_keeps_exactly_the_long_words(source in word_list_strategy()) {
        let loaded = split_words(&source);
        let expected = loaded.iter().filter(|w| w.chars().count() >= 4).count();

        let filtered = apply(loaded, &[TransformSpec::MinLength(4)]);
        prop_assert_eq!(filtered.len(), expected);
        for word in filtered {
            prop_assert!(word.chars().count() >= 4);
        }
    }

    #[test]
    fn validation_steps_match_filtered_count(source in word_list_strategy()) {
        let loaded = split_words(&source);
        let expected = loaded.iter().filter(|w| w.chars().count() >= 4).count();

        let words = apply(
            loaded,
            &[TransformSpec::MinLength(4), TransformSpec::Uppercase],
        );
        prop_assert_eq!(words.len(), expected);
    }
}
