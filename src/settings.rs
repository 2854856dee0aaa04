use crate::exceptions::ContribError;
use crate::uploader::Uploader;
use std::path::PathBuf;

/// Command-line overrides. Anything left `None` falls back to the
/// environment and then to the per-user defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cache_file: Option<PathBuf>,
    pub history_dir: Option<PathBuf>,
    pub profile: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub oi_version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub cache_path: PathBuf,
    pub history_path: PathBuf,
    pub profile_path: PathBuf,
    pub endpoint: Option<String>,
    pub version: String,
}

impl Settings {
    pub fn resolve(overrides: Overrides) -> Result<Self, ContribError> {
        let cache_path = match overrides.cache_file {
            Some(p) => p,
            None => crate::consent_cache::get_cache_file()?,
        };
        let history_path = match overrides.history_dir {
            Some(p) => p,
            None => crate::history::get_conversations_dir()?,
        };
        let profile_path = match overrides.profile {
            Some(p) => p,
            None => crate::profile::get_default_profile_path()?,
        };

        Ok(Self {
            cache_path,
            history_path,
            profile_path,
            endpoint: overrides.endpoint,
            version: overrides
                .oi_version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
        })
    }

    pub fn uploader(&self) -> Uploader {
        match &self.endpoint {
            Some(url) => Uploader::with_endpoint(url.clone(), self.version.clone()),
            None => Uploader::from_env(self.version.clone()),
        }
    }
}
