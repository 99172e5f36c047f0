use miette::Diagnostic;
use thiserror::Error;

/// Main error type for furnish operations
#[derive(Error, Diagnostic, Debug)]
pub enum FurnishError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(furnish::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error: {message}")]
    #[diagnostic(code(furnish::image))]
    Image { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(furnish::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid geometry for {name}: {width}x{height}")]
    #[diagnostic(
        code(furnish::geometry),
        help("Source textures must have non-zero width and height; skip this item")
    )]
    InvalidGeometry { name: String, width: u32, height: u32 },

    #[error("Config error: {message}")]
    #[diagnostic(code(furnish::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(furnish::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FurnishError>;
