use crate::exceptions::ContribError;
use crate::fs::{atomic_write_json, restrict_permissions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which consent prompts have already been shown on this machine.
///
/// Flags only ever move from `false` to `true`; there is no way to clear one
/// through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsentCache {
    displayed_contribution_message: bool,
    asked_to_contribute_past: bool,
    asked_to_contribute_future: bool,
}

pub fn get_cache_file() -> Result<PathBuf, ContribError> {
    Ok(crate::utils::get_app_cache_dir()?.join(crate::consts::CONTRIBUTE_CACHE_FILE_NAME))
}

impl ConsentCache {
    /// Reads the cache at `path`, or creates and persists an all-false cache
    /// if the file does not exist yet.
    ///
    /// Malformed content is reported as [`ContribError::CacheCorrupt`] and the
    /// file is left as is.
    pub fn load_or_init(path: &Path) -> Result<Self, ContribError> {
        if !path.exists() {
            let cache = Self::default();
            cache.save(path)?;
            tracing::debug!(path = %path.display(), "created contribution cache");
            return Ok(cache);
        }
        Self::read(path)
    }

    /// Like [`ConsentCache::load_or_init`] but never writes: a missing file
    /// reads as all-false.
    pub fn read(path: &Path) -> Result<Self, ContribError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cache: Self =
            serde_json::from_str(&content).map_err(|e| ContribError::CacheCorrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), ?cache, "loaded contribution cache");
        Ok(cache)
    }

    pub fn save(&self, path: &Path) -> Result<(), ContribError> {
        atomic_write_json(path, self)?;
        restrict_permissions(path);
        Ok(())
    }

    pub fn displayed_contribution_message(&self) -> bool {
        self.displayed_contribution_message
    }

    pub fn asked_to_contribute_past(&self) -> bool {
        self.asked_to_contribute_past
    }

    pub fn asked_to_contribute_future(&self) -> bool {
        self.asked_to_contribute_future
    }

    pub fn mark_displayed_contribution_message(&mut self) {
        self.displayed_contribution_message = true;
    }

    pub fn mark_asked_to_contribute_past(&mut self) {
        self.asked_to_contribute_past = true;
    }

    pub fn mark_asked_to_contribute_future(&mut self) {
        self.asked_to_contribute_future = true;
    }
}
