use crate::exceptions::ContribError;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write JSON to a file using a temporary file + rename strategy.
///
/// The temp file lives in the destination directory so the rename never
/// crosses filesystems. Missing parent directories are created.
pub fn atomic_write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ContribError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;

    {
        let mut writer = std::io::BufWriter::new(&mut temp_file);
        serde_json::to_writer(&mut writer, data)?;
        writer.flush()?;
    }

    temp_file
        .persist(path)
        .map_err(|e| ContribError::Io(e.error))?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContribError> {
    let file = fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Restricts a file to owner read/write. Best effort; failures are ignored.
pub fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            let mut perms = meta.permissions();
            perms.set_mode(0o600);
            let _ = fs::set_permissions(path, perms);
        }
    }
    #[cfg(not(unix))]
    let _ = path;
}
