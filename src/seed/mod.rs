// src/seed/mod.rs

//! Initial-state input for the graph.
//!
//! - [`model`] maps the TOML seed file onto serde types.
//! - [`loader`] reads and deserializes a seed file.
//! - [`validate`] checks child references and duplicate edges.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{SeedFile, SeedNode};
pub use validate::validate_seed;
