//! Artifact validators.
//!
//! [`syntax`] loads an artifact; the other validators inspect the parsed
//! graph and never touch the file system.

pub mod literals;
pub mod namespaces;
pub mod structure;
pub mod syntax;
