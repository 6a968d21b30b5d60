// Common error types shared by all grid operations

use std::fmt;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone)]
pub enum GridError {
    /// Section index outside the model
    InvalidSection {
        section: usize,
        section_count: usize,
    },
    /// Cell position outside its section
    InvalidCell {
        section: usize,
        position: usize,
        cell_count: usize,
    },
    /// Configuration validation errors
    ConfigError(String),
    /// Config file read/write errors
    IoError(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidSection {
                section,
                section_count,
            } => {
                write!(
                    f,
                    "Invalid section index {} - model has {} sections",
                    section, section_count
                )
            }
            GridError::InvalidCell {
                section,
                position,
                cell_count,
            } => {
                write!(
                    f,
                    "Invalid cell position {} in section {} - section has {} cells",
                    position, section, cell_count
                )
            }
            GridError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GridError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::IoError(err.to_string())
    }
}
