//! High-score persistence
//!
//! The high score outlives sessions as a single integer in a plain text
//! file. A missing or unreadable file reads as 0 rather than failing; only
//! writes can surface an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = ".neo-snake-highscore";

/// The persisted best score and where it lives on disk
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open the store, seeding the cached best from disk. Malformed or
    /// absent data falls back to 0.
    pub fn open(path: PathBuf) -> Self {
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);

        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a session score; persists and returns true only when it beats
    /// the stored best.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }

        self.best = score;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
        }
        fs::write(&self.path, self.best.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        Ok(true)
    }
}
