//! Engine error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal construction and configuration failures.
///
/// Nothing here is retried: a bad configuration or missing model means the
/// engine cannot be built at all.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read config file {}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("model file not found at {}; export the trained network there first", .0.display())]
    ModelMissing(PathBuf),

    #[error("failed to load model: {0}")]
    ModelLoad(String),

    #[error("model takes {found} inputs but the position encoding produces {expected}")]
    ModelShape { expected: usize, found: usize },
}
