// src/errors.rs

//! Crate-wide error types and the `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("node '{id}' already exists in the graph")]
    NodeAlreadyExists { id: String },

    #[error("node '{id}' not found in the graph")]
    NodeNotFound { id: String },

    #[error("edge from '{source}' to '{target}' already exists")]
    EdgeAlreadyExists { source: String, target: String },

    #[error("edge from '{source}' to '{target}' not found in the graph")]
    EdgeNotFound { source: String, target: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("seed error: {0}")]
    Seed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
