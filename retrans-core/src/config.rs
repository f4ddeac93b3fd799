//! Mapping definitions and configuration management for `retrans-core`.
//!
//! This module defines the data structures for substitution rules and mappings,
//! handles YAML/JSON (de)serialization of mapping files, and validates them
//! before use.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::engine;
use crate::errors::TransliterationError;
use crate::patterns::compiler::compile_pattern;

/// Matches group references in a replacement string: `$$`, `${name}` or `$name`.
static GROUP_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\$|\{([^}]*)\}|([_0-9A-Za-z]+))").expect("group reference regex is valid")
});

/// A single `(pattern, replacement)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SubstitutionRule {
    /// Unicode-aware regular expression.
    pub pattern: String,
    /// Replacement text; may reference capture groups as `$1`, `${1}`, `$name` or `${name}`.
    #[serde(default)]
    pub replace_with: String,
}

impl SubstitutionRule {
    pub fn new(pattern: impl Into<String>, replace_with: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replace_with: replace_with.into(),
        }
    }
}

/// An ordered set of substitution rules applied one after another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Mapping {
    /// Optional identifier, used in logs and validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rules in application order. On disk this is either a list of
    /// `{pattern, replace_with}` entries or a `pattern: replacement` table.
    #[serde(deserialize_with = "deserialize_rules")]
    pub rules: Vec<SubstitutionRule>,
}

impl Mapping {
    /// An empty mapping, which leaves every word unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from `(pattern, replacement)` pairs, keeping their order.
    pub fn from_pairs<I, P, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Sets the mapping's name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a rule to the end of the mapping.
    pub fn with_rule(mut self, pattern: impl Into<String>, replace_with: impl Into<String>) -> Self {
        self.rules.push(SubstitutionRule::new(pattern, replace_with));
        self
    }

    /// Number of rules in the mapping.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the mapping has no rules and is therefore the identity.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

impl<P: Into<String>, R: Into<String>> FromIterator<(P, R)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (P, R)>>(iter: T) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(pattern, replace_with)| SubstitutionRule::new(pattern, replace_with))
                .collect(),
            ..Self::default()
        }
    }
}

/// Accepts either a sequence of rules or a pattern-to-replacement table.
/// Table entries are read in document order.
fn deserialize_rules<'de, D>(deserializer: D) -> Result<Vec<SubstitutionRule>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RulesVisitor;

    impl<'de> Visitor<'de> for RulesVisitor {
        type Value = Vec<SubstitutionRule>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of substitution rules or a table of pattern: replacement entries")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut rules = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(rule) = seq.next_element::<SubstitutionRule>()? {
                rules.push(rule);
            }
            Ok(rules)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut rules = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((pattern, replace_with)) = map.next_entry::<String, String>()? {
                rules.push(SubstitutionRule { pattern, replace_with });
            }
            Ok(rules)
        }
    }

    deserializer.deserialize_any(RulesVisitor)
}

/// The top-level, file-loadable form of a mapping sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransliterationConfig {
    /// Mappings in application order.
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

impl TransliterationConfig {
    /// Wraps an ordered list of mappings.
    pub fn new(mappings: Vec<Mapping>) -> Self {
        Self { mappings }
    }

    /// Loads and validates a mapping file.
    ///
    /// `.json` files are parsed as JSON; `.yaml`, `.yml` and extensionless
    /// files as YAML. Any other extension is rejected.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading mappings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping file {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") | None => Self::from_yaml_str(&text),
            Some(other) => Err(TransliterationError::UnsupportedFormat(format!(
                "'.{}' (expected .yaml, .yml or .json)",
                other
            ))
            .into()),
        }
        .with_context(|| format!("Failed to parse mapping file {}", path.display()))?;

        validate_mappings(&config.mappings)
            .with_context(|| format!("Invalid mapping file {}", path.display()))?;
        info!(
            "Loaded {} mapping(s) with {} rule(s) from {}.",
            config.mappings.len(),
            config.rule_count(),
            path.display()
        );
        Ok(config)
    }

    /// Parses a YAML document without validating it.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: TransliterationConfig =
            serde_yml::from_str(text).context("Failed to parse YAML mappings")?;
        debug!("Parsed {} mapping(s) from YAML.", config.mappings.len());
        Ok(config)
    }

    /// Parses a JSON document without validating it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: TransliterationConfig =
            serde_json::from_str(text).context("Failed to parse JSON mappings")?;
        debug!("Parsed {} mapping(s) from JSON.", config.mappings.len());
        Ok(config)
    }

    /// Runs [`validate_mappings`] over this configuration.
    pub fn validate(&self) -> Result<(), TransliterationError> {
        validate_mappings(&self.mappings)
    }

    /// Total number of rules across all mappings.
    pub fn rule_count(&self) -> usize {
        self.mappings.iter().map(Mapping::len).sum()
    }

    /// Applies every mapping in order to a single word.
    pub fn transliterate(&self, word: &str) -> Result<String, TransliterationError> {
        engine::transliterate(&self.mappings, word)
    }

    /// Applies every mapping in order to each word of the list.
    pub fn transliterate_list<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>, TransliterationError> {
        engine::transliterate_list(&self.mappings, words)
    }
}

/// Checks every pattern, every replacement group reference and mapping name
/// uniqueness. All problems are reported together, one per line.
pub fn validate_mappings(mappings: &[Mapping]) -> Result<(), TransliterationError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for (index, mapping) in mappings.iter().enumerate() {
        let label = match &mapping.name {
            Some(name) => {
                if !names.insert(name.as_str()) {
                    errors.push(format!("Duplicate mapping name found: '{}'.", name));
                }
                format!("'{}'", name)
            }
            None => format!("#{}", index + 1),
        };

        for rule in &mapping.rules {
            let regex = match compile_pattern(&rule.pattern) {
                Ok(regex) => regex,
                Err(e) => {
                    errors.push(format!("Mapping {}: {}", label, e));
                    continue;
                }
            };

            for missing in unknown_group_references(&regex, &rule.replace_with) {
                errors.push(format!(
                    "Mapping {}: replacement '{}' for pattern '{}' references non-existent capture group '{}'.",
                    label, rule.replace_with, rule.pattern, missing
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TransliterationError::Validation(errors.join("\n")))
    }
}

/// Returns the group references in `replacement` that `regex` does not define.
fn unknown_group_references(regex: &Regex, replacement: &str) -> Vec<String> {
    let group_names: HashSet<&str> = regex.capture_names().flatten().collect();

    GROUP_REFERENCE
        .captures_iter(replacement)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|reference| reference.as_str())
        .filter(|reference| match reference.parse::<usize>() {
            Ok(index) => index >= regex.captures_len(),
            Err(_) => !group_names.contains(reference),
        })
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_keeps_insertion_order() {
        let mapping = Mapping::from_pairs([("z", "1"), ("a", "2"), ("m", "3")]);
        let patterns: Vec<&str> = mapping.rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, ["z", "a", "m"]);
    }

    #[test]
    fn table_form_is_read_in_document_order() {
        let yaml = r#"
mappings:
  - name: cyrillic
    rules:
      "щ": "shch"
      "ш": "sh"
      "ч": "ch"
"#;
        let config = TransliterationConfig::from_yaml_str(yaml).unwrap();
        let patterns: Vec<&str> = config.mappings[0]
            .rules
            .iter()
            .map(|r| r.pattern.as_str())
            .collect();
        assert_eq!(patterns, ["щ", "ш", "ч"]);
    }

    #[test]
    fn unknown_group_references_are_detected() {
        let regex = Regex::new(r"(?P<head>\w)(\w)").unwrap();
        assert!(unknown_group_references(&regex, "$1${2}$head$$").is_empty());
        assert_eq!(unknown_group_references(&regex, "$3 ${tail}"), ["3", "tail"]);
    }

    #[test]
    fn escaped_dollar_is_not_a_reference() {
        let regex = Regex::new("a").unwrap();
        assert!(unknown_group_references(&regex, "$$5").is_empty());
    }

    #[test]
    fn empty_pattern_is_valid() {
        assert!(validate_mappings(&[Mapping::from_pairs([("", "-")])]).is_ok());
    }
}
