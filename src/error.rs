//! Startup error types
//!
//! Only startup can fail. Once a `GameState` exists every frame runs to
//! completion; crowding and pool exhaustion are reported as outcomes, not errors.

use std::path::PathBuf;

use thiserror::Error;

/// A required sprite could not be provided. Always fatal.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite `{name}` is not listed in the asset manifest")]
    Missing { name: &'static str },

    #[error("sprite `{name}` image not found at {}", path.display())]
    FileNotFound { name: &'static str, path: PathBuf },

    #[error("sprite `{name}` has invalid size {width}x{height}")]
    InvalidSize {
        name: &'static str,
        width: f32,
        height: f32,
    },

    #[error("failed to read asset manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed asset manifest")]
    Parse(#[from] serde_json::Error),
}

/// Tuning could not be read or holds values the simulation cannot run with.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tuning file")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
