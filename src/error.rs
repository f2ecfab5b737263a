use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading an external question bank.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("failed to read question bank {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse question bank {path}: {source}")]
  Toml {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
