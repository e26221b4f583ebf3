// Error types for the navigator and its configuration
use std::path::PathBuf;
use thiserror::Error;

/// A path handed to the path model could not become a breadcrumb path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPathError {
    #[error("path is not absolute: {}", .0.display())]
    NotAbsolute(PathBuf),
    #[error("path has a component that is not valid UTF-8: {}", .0.display())]
    NonUtf8(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
