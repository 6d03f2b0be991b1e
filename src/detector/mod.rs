use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Remembers the raw bytes of the last processed payload in a flat file.
pub struct ChangeDetector {
    path: PathBuf,
}

impl ChangeDetector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True only when `payload` is byte-for-byte what was last recorded.
    /// An unreadable or missing file counts as "never seen".
    pub fn is_unchanged(&self, payload: &[u8]) -> bool {
        match fs::read(&self.path) {
            Ok(last) => last == payload,
            Err(e) => {
                warn!("failed to read last fetch file {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Overwrites the stored payload. Failures are logged, never returned.
    pub fn record(&self, payload: &[u8]) {
        if let Err(e) = fs::write(&self.path, payload) {
            warn!("failed to write last fetch {}: {}", self.path.display(), e);
        }
    }
}
