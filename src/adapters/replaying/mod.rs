//! Replaying adapters that serve shell interactions from cassettes.

pub mod shell;
