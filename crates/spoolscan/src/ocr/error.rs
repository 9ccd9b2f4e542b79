use std::fmt;

/// OCR engine errors, internal to the adapter.
///
/// These never cross the pipeline boundary: the adapter logs them and falls
/// back to its sentinel diagnostics, so a scan keeps going without OCR.
#[derive(Debug, Clone)]
pub enum OcrError {
    EngineSpawnFailed(String),
    EngineFailed(String),
    Timeout(u64),
    OutputNotUtf8(String),
    TempImageWrite(String),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EngineSpawnFailed(msg) => write!(f, "failed to start OCR engine: {}", msg),
            Self::EngineFailed(msg) => write!(f, "OCR engine failed: {}", msg),
            Self::Timeout(secs) => write!(f, "OCR engine timed out after {} seconds", secs),
            Self::OutputNotUtf8(msg) => write!(f, "OCR output was not valid UTF-8: {}", msg),
            Self::TempImageWrite(msg) => write!(f, "failed to write preprocessing variant: {}", msg),
        }
    }
}

impl std::error::Error for OcrError {}
