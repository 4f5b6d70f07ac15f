// src/output/mod.rs
//! Human-readable output written to stdout by the binary.

pub mod summary;

pub use summary::{write_plan, write_summary};
