//! Error types for the Venn renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing or rendering a diagram
#[derive(Error, Debug)]
pub enum Error {
    /// A color string is not a valid hex color
    #[error("Invalid color '{0}': expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// The save path names an image format the renderer cannot produce
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Invalid configuration (options, job files, save path)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to rasterize or encode the diagram
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Filesystem error while reading a job or writing the image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON job description
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
