//! # dictgen
//!
//! Generates JavaScript dictionary constants from newline-delimited word lists.
//!
//! A word list file goes through three stages:
//!
//! 1. [`loader`] — read the file, trim each line, drop lines that trim to empty.
//! 2. [`transform`] — apply an ordered list of per-word steps (uppercase,
//!    minimum-length filter).
//! 3. [`emit`] — render the processed sequence as a one-line JavaScript
//!    constant declaration (`const DICTIONARY = [...];` or
//!    `const VALIDATION_DICT = new Set([...]);`).
//!
//! The [`pipeline`] module ties the stages together: named configurations
//! describe which input file, transforms, emitter, and output file to use,
//! and the executor runs a configuration end to end behind a single
//! coarse-grained error boundary.

pub mod emit;
pub mod loader;
pub mod pipeline;
pub mod transform;
