//! Command implementations for the `abbrev` CLI

pub mod abbreviate;
