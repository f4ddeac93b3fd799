//! Regular-expression handling for substitution mappings.
//!
//! This module turns the `(pattern, replacement)` pairs of a [`Mapping`](crate::config::Mapping)
//! into compiled regular expressions and applies them in order. Compiled patterns
//! only live for the duration of a single engine call.

pub(crate) mod compiler;
