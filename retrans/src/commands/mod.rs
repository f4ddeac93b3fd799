//! Implementations of the `retrans` subcommands.

pub mod apply;
pub mod check;
