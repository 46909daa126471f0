use bevy::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WayforgeError {
    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("Config file I/O failed: {0}")]
    ConfigIoFailed(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    // Traversal errors, all non-fatal, the invocation that hit one aborts
    #[error("No ground detected within {range} units below the probe origin")]
    NoGroundDetected { range: f32 },

    #[error("Failed to spawn a curve host at {origin:?}")]
    SpawnFailed { origin: Vec3 },

    #[error("Spawned curve host has no spline to populate")]
    SplineMissing,

    #[error("A curve needs at least 2 control points, got {count}")]
    InsufficientPoints { count: usize },
}

/// Result type alias for all operations
pub type WayforgeResult<T> = Result<T, WayforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wayforge_error_display() {
        let err = WayforgeError::NoGroundDetected { range: 1000.0 };
        assert!(err.to_string().contains("No ground detected"));
        assert!(err.to_string().contains("1000"));

        let err = WayforgeError::InsufficientPoints { count: 1 };
        assert!(err.to_string().contains("got 1"));

        let err = WayforgeError::SpawnFailed { origin: Vec3::ZERO };
        assert!(err.to_string().contains("curve host"));
    }
}
