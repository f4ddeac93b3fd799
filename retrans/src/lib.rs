// retrans/src/lib.rs
//! # retrans CLI Application
//!
//! Command-line front end for `retrans-core`. The binary loads a mapping file
//! and transliterates words from arguments, a file or stdin.

pub mod cli;
pub mod commands;
pub mod logger;
