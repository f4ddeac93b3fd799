//! compiler.rs - Compiles substitution mappings into ready-to-apply regexes.
//!
//! Every rule of a mapping is compiled before any substitution runs, so a bad
//! pattern anywhere in the mapping yields an error and no output.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use regex::{Regex, RegexBuilder};

use crate::config::Mapping;
use crate::errors::TransliterationError;

/// Upper bound on the compiled size of a single pattern.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled substitution rule.
#[derive(Debug)]
pub(crate) struct CompiledRule<'m> {
    pub regex: Regex,
    pub replace_with: &'m str,
}

/// All rules of one mapping, compiled and kept in mapping order.
#[derive(Debug)]
pub(crate) struct CompiledMapping<'m> {
    pub rules: Vec<CompiledRule<'m>>,
}

impl CompiledMapping<'_> {
    /// Applies every rule in order, threading each result into the next rule.
    pub fn apply(&self, word: &str) -> String {
        let mut current = word.to_owned();
        for rule in &self.rules {
            let replaced = rule.regex.replace_all(&current, rule.replace_with);
            trace!(
                "'{}' -> '{}' turned '{}' into '{}'",
                rule.regex.as_str(),
                rule.replace_with,
                current,
                replaced
            );
            current = replaced.into_owned();
        }
        current
    }
}

/// Compiles one pattern in Unicode mode.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, TransliterationError> {
    RegexBuilder::new(pattern)
        .unicode(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|source| TransliterationError::PatternError {
            pattern: pattern.to_owned(),
            source,
        })
}

/// Compiles every rule of `mapping`, stopping at the first invalid pattern.
pub(crate) fn compile_mapping(mapping: &Mapping) -> Result<CompiledMapping<'_>, TransliterationError> {
    debug!(
        "Compiling mapping '{}' with {} rule(s).",
        mapping.display_name(),
        mapping.rules.len()
    );

    let rules = mapping
        .rules
        .iter()
        .map(|rule| {
            compile_pattern(&rule.pattern).map(|regex| CompiledRule {
                regex,
                replace_with: rule.replace_with.as_str(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledMapping { rules })
}
