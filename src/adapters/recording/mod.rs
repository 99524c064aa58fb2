//! Recording adapters that capture shell interactions to cassettes.

pub mod shell;
