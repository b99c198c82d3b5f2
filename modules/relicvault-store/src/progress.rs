// ProgressStore — local persistence for the client-only build, injected
// into the game session instead of reached as ambient global storage.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use relicvault_common::GameProgress;

/// Fixed storage filename, the client-only build's single storage key.
pub const PROGRESS_FILE: &str = "relicvault_progress.json";

pub trait ProgressStore: Send + Sync {
    /// Read the persisted record. `None` on first run.
    fn load(&self) -> Result<Option<GameProgress>>;

    /// Overwrite the whole record.
    fn save(&self, progress: &GameProgress) -> Result<()>;
}

/// Whole-record JSON persistence at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The standard progress file inside a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PROGRESS_FILE))
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameProgress>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let progress = serde_json::from_str(&raw)
            .with_context(|| format!("corrupt progress file {}", self.path.display()))?;
        Ok(Some(progress))
    }

    fn save(&self, progress: &GameProgress) -> Result<()> {
        let raw = serde_json::to_string(progress)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryProgress {
    slot: Mutex<Option<GameProgress>>,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgress {
    fn load(&self) -> Result<Option<GameProgress>> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, progress: &GameProgress) -> Result<()> {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(progress.clone());
        Ok(())
    }
}
