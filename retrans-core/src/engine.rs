// retrans-core/src/engine.rs
//! The transliteration engine.
//!
//! Four pure functions apply substitution mappings to a word or a list of
//! words. Within a mapping, rules run in order and each rule sees the output of
//! the previous one. Across a sequence, mapping *i* runs on the output of
//! mapping *i - 1*. Nothing is cached between calls.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::Mapping;
use crate::errors::TransliterationError;
use crate::patterns::compiler::compile_mapping;

/// Replaces every match of each rule's pattern in `word`, rule by rule.
///
/// An empty mapping returns `word` unchanged.
///
/// # Errors
///
/// Returns [`TransliterationError::PatternError`] if any pattern in `mapping`
/// is invalid. No substitution is performed in that case.
///
/// ```
/// use retrans_core::{apply_mapping, Mapping};
///
/// let mapping = Mapping::from_pairs([("a", "b")]);
/// assert_eq!(apply_mapping(&mapping, "banana").unwrap(), "bbnbnb");
/// ```
pub fn apply_mapping(mapping: &Mapping, word: &str) -> Result<String, TransliterationError> {
    let compiled = compile_mapping(mapping)?;
    Ok(compiled.apply(word))
}

/// Applies `mapping` to each word independently, preserving order and length.
///
/// An empty `words` yields an empty list without compiling any pattern.
pub fn apply_mapping_to_list<S: AsRef<str>>(
    mapping: &Mapping,
    words: &[S],
) -> Result<Vec<String>, TransliterationError> {
    if words.is_empty() {
        return Ok(Vec::new());
    }
    let compiled = compile_mapping(mapping)?;
    Ok(words.iter().map(|word| compiled.apply(word.as_ref())).collect())
}

/// Applies each mapping in turn, feeding the output of one into the next.
///
/// ```
/// use retrans_core::{transliterate, Mapping};
///
/// let mappings = [
///     Mapping::from_pairs([("a", "b")]),
///     Mapping::from_pairs([("b", "c")]),
/// ];
/// assert_eq!(transliterate(&mappings, "aa").unwrap(), "cc");
/// ```
pub fn transliterate(mappings: &[Mapping], word: &str) -> Result<String, TransliterationError> {
    debug!("Transliterating a word through {} mapping(s).", mappings.len());
    mappings
        .iter()
        .try_fold(word.to_owned(), |current, mapping| apply_mapping(mapping, &current))
}

/// Applies each mapping in turn to the whole list before moving to the next.
pub fn transliterate_list<S: AsRef<str>>(
    mappings: &[Mapping],
    words: &[S],
) -> Result<Vec<String>, TransliterationError> {
    debug!(
        "Transliterating {} word(s) through {} mapping(s).",
        words.len(),
        mappings.len()
    );
    let initial: Vec<String> = words.iter().map(|word| word.as_ref().to_owned()).collect();
    mappings
        .iter()
        .try_fold(initial, |current, mapping| apply_mapping_to_list(mapping, current.as_slice()))
}
