//! Error types for spoolscan.
//!
//! The pipeline is built around best-effort enrichment: almost every stage
//! degrades locally instead of failing the scan. The variants here cover the
//! few conditions that do surface to callers:
//!
//! - `Io` - file system errors, always bubble up unchanged
//! - `Image` - unreadable or corrupt input image, the single fatal condition
//!   for a scan request
//! - `Lookup` - network lookup failures; the orchestrator absorbs these and
//!   logs them, but the lookup clients report them explicitly rather than
//!   swallowing them internally
//! - `Config` - invalid configuration files or values
use thiserror::Error;

/// Result type alias using `SpoolscanError`.
pub type Result<T> = std::result::Result<T, SpoolscanError>;

/// Main error type for all spoolscan operations.
#[derive(Debug, Error)]
pub enum SpoolscanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {message}")]
    Image {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Lookup error: {message}")]
    Lookup {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SpoolscanError {
    /// Create an Image error.
    pub fn image<S: Into<String>>(message: S) -> Self {
        Self::Image {
            message: message.into(),
            source: None,
        }
    }

    /// Create an Image error with source.
    pub fn image_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Image {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Lookup error.
    pub fn lookup<S: Into<String>>(message: S) -> Self {
        Self::Lookup {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Lookup error with source.
    pub fn lookup_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Lookup {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Config error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Config error with source.
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<image::ImageError> for SpoolscanError {
    fn from(err: image::ImageError) -> Self {
        SpoolscanError::Image {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for SpoolscanError {
    fn from(err: reqwest::Error) -> Self {
        SpoolscanError::Lookup {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpoolscanError = io_err.into();
        assert!(matches!(err, SpoolscanError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_image_error() {
        let err = SpoolscanError::image("unreadable image");
        assert_eq!(err.to_string(), "Image error: unreadable image");
    }

    #[test]
    fn test_image_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad data");
        let err = SpoolscanError::image_with_source("decode failed", source);
        assert_eq!(err.to_string(), "Image error: decode failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_lookup_error() {
        let err = SpoolscanError::lookup("catalog unreachable");
        assert_eq!(err.to_string(), "Lookup error: catalog unreachable");
    }

    #[test]
    fn test_config_error() {
        let err = SpoolscanError::config("invalid timeout");
        assert_eq!(err.to_string(), "Configuration error: invalid timeout");
    }

    #[test]
    fn test_config_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad value");
        let err = SpoolscanError::config_with_source("invalid field", source);
        assert_eq!(err.to_string(), "Configuration error: invalid field");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_bubbles_unchanged() {
        fn read_file() -> Result<String> {
            let content = std::fs::read_to_string("/nonexistent/spoolscan-test.txt")?;
            Ok(content)
        }

        let result = read_file();
        assert!(matches!(result.unwrap_err(), SpoolscanError::Io(_)));
    }
}
