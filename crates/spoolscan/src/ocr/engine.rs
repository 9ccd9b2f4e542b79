//! Tesseract subprocess adapter.
//!
//! The engine binary location is resolved once, at construction, from the
//! injected [`OcrConfig`] - explicit path first, then `PATH`, then
//! well-known install locations. An unresolved engine is not an error: the
//! adapter degrades to a sentinel diagnostic string so the pipeline can
//! still hand the user something actionable.

use super::error::OcrError;
use super::preprocess::preprocess_variants;
use crate::config::OcrConfig;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{Duration, timeout};

/// Diagnostic returned when no engine binary could be resolved.
pub const ENGINE_MISSING_TEXT: &str =
    "ERROR: Tesseract OCR engine not found. Install tesseract and make sure it is on PATH.";

/// Diagnostic returned when every preprocessing variant came back empty.
pub const NO_TEXT_DETECTED: &str = "No text detected. Try better lighting or get closer.";

/// Timeout per engine invocation (seconds).
const ENGINE_TIMEOUT_SECONDS: u64 = 30;

/// Install locations probed when the binary is neither configured nor on
/// `PATH`.
const FALLBACK_BINARIES: &[&str] = &[
    "/usr/bin/tesseract",
    "/usr/local/bin/tesseract",
    "/opt/homebrew/bin/tesseract",
    r"C:\Program Files\Tesseract-OCR\tesseract.exe",
];

/// OCR engine adapter wrapping a tesseract subprocess.
pub struct TesseractOcr {
    binary: Option<PathBuf>,
    language: String,
    psm: u8,
}

impl TesseractOcr {
    /// Build the adapter, resolving the engine binary from the injected
    /// configuration. Construction never fails; a missing engine shows up
    /// later as the sentinel diagnostic.
    pub fn new(config: &OcrConfig) -> Self {
        let binary = resolve_engine_binary(config.binary.as_deref());
        match &binary {
            Some(path) => tracing::debug!(binary = %path.display(), "resolved OCR engine"),
            None => tracing::warn!("no OCR engine binary found; scans will return the sentinel diagnostic"),
        }

        Self {
            binary,
            language: config.language.clone(),
            psm: config.psm,
        }
    }

    /// True when an engine binary was resolved at construction.
    pub fn is_available(&self) -> bool {
        self.binary.is_some()
    }

    /// Run OCR over the three preprocessing variants and concatenate the
    /// outputs. Always returns text: either recognized content or one of
    /// the sentinel diagnostics. Per-variant failures are logged and
    /// skipped.
    pub async fn extract_text(&self, image: &DynamicImage) -> String {
        let Some(binary) = &self.binary else {
            return ENGINE_MISSING_TEXT.to_string();
        };

        let scratch = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => {
                tracing::warn!(error = %err, "could not create OCR scratch directory");
                return NO_TEXT_DETECTED.to_string();
            }
        };

        let mut outputs = Vec::new();
        for (index, variant) in preprocess_variants(image).iter().enumerate() {
            let variant_path = scratch.path().join(format!("variant-{index}.png"));
            let result = match variant.save(&variant_path) {
                Ok(()) => self.run_engine(binary, &variant_path).await,
                Err(err) => Err(OcrError::TempImageWrite(err.to_string())),
            };

            match result {
                Ok(text) => outputs.push(text),
                Err(err) => tracing::warn!(variant = index, error = %err, "OCR variant failed"),
            }
        }

        let combined = outputs.join("\n");
        if combined.trim().is_empty() {
            NO_TEXT_DETECTED.to_string()
        } else {
            combined
        }
    }

    async fn run_engine(&self, binary: &Path, image_path: &Path) -> Result<String, OcrError> {
        let child = Command::new(binary)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("--psm")
            .arg(self.psm.to_string())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| OcrError::EngineSpawnFailed(e.to_string()))?;

        let output = match timeout(Duration::from_secs(ENGINE_TIMEOUT_SECONDS), child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(OcrError::EngineFailed(e.to_string())),
            Err(_) => return Err(OcrError::Timeout(ENGINE_TIMEOUT_SECONDS)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout).map_err(|e| OcrError::OutputNotUtf8(e.to_string()))
    }
}

/// Resolve the engine binary: explicit configured path, then a `PATH`
/// scan, then well-known install locations.
pub fn resolve_engine_binary(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(binary = %path.display(), "configured OCR engine binary does not exist");
        return None;
    }

    if let Some(paths) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&paths) {
            for name in ["tesseract", "tesseract.exe"] {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
    }

    FALLBACK_BINARIES
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}
