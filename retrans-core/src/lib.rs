// retrans-core/src/lib.rs
//! # retrans Core Library
//!
//! `retrans-core` applies ordered regular-expression substitutions to words,
//! typically to transliterate text from one script or spelling system into
//! another. A [`Mapping`] is an ordered list of `(pattern, replacement)` pairs;
//! a sequence of mappings is applied one mapping at a time.
//!
//! The engine is pure and stateless: every call compiles the patterns it needs,
//! applies them and returns a new value. Nothing is cached between calls and no
//! input is mutated.
//!
//! ## Modules
//!
//! * `engine`: The four transliteration operations.
//! * `config`: `Mapping`, `SubstitutionRule` and `TransliterationConfig`, plus
//!   YAML/JSON loading and validation of mapping files.
//! * `errors`: The `TransliterationError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use retrans_core::{transliterate_list, Mapping};
//!
//! let mappings = vec![
//!     Mapping::from_pairs([("shch", "щ"), ("sh", "ш"), ("ch", "ч")]),
//!     Mapping::from_pairs([("a", "а"), ("o", "о"), ("u", "у"), ("k", "к")]),
//! ];
//!
//! let words = ["shchuka", "chashka"];
//! let out = transliterate_list(&mappings, &words).unwrap();
//! assert_eq!(out, ["щука", "чашка"]);
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return [`TransliterationError::PatternError`] when a
//! pattern does not compile. Loading mapping files uses `anyhow::Error` with
//! context naming the file; the underlying `TransliterationError` can be
//! recovered with `downcast_ref`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
mod patterns;

/// Re-exports the mapping types and the file loader.
pub use config::{validate_mappings, Mapping, SubstitutionRule, TransliterationConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TransliterationError;

/// Re-exports the transliteration operations.
pub use engine::{apply_mapping, apply_mapping_to_list, transliterate, transliterate_list};
