use crate::exceptions::ContribError;
#[cfg(not(target_arch = "riscv64"))]
use rustls::crypto::aws_lc_rs;
#[cfg(target_arch = "riscv64")]
use rustls::crypto::ring;
use std::path::PathBuf;

pub fn setup_crypto_provider() {
    static DONE: std::sync::OnceLock<()> = std::sync::OnceLock::new();
    DONE.get_or_init(|| {
        if rustls::crypto::CryptoProvider::get_default().is_none() {
            #[cfg(target_arch = "riscv64")]
            let provider = ring::default_provider();

            #[cfg(not(target_arch = "riscv64"))]
            let provider = aws_lc_rs::default_provider();

            let _ = provider.install_default();
        }
    });
}

pub fn setup_http_client() -> reqwest::Client {
    setup_crypto_provider();
    reqwest::Client::new()
}

fn xdg_dir(var: &str, home_fallback: &str) -> Result<PathBuf, ContribError> {
    if let Ok(dir) = std::env::var(var)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(home_fallback))
        .ok_or_else(|| {
            ContribError::Configuration(format!(
                "Could not determine home directory (set {} instead)",
                var
            ))
        })
}

/// `$XDG_CACHE_HOME/open-interpreter`, falling back to `~/.cache/open-interpreter`.
pub fn get_app_cache_dir() -> Result<PathBuf, ContribError> {
    Ok(xdg_dir("XDG_CACHE_HOME", ".cache")?.join(crate::consts::APP_DIR_NAME))
}

/// `$XDG_CONFIG_HOME/open-interpreter`, falling back to `~/.config/open-interpreter`.
pub fn get_app_config_dir() -> Result<PathBuf, ContribError> {
    Ok(xdg_dir("XDG_CONFIG_HOME", ".config")?.join(crate::consts::APP_DIR_NAME))
}
