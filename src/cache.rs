use crate::error::{GhStarsError, Result};
use crate::models::StarredEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read the cache file written by `save`.
pub fn load(path: &Path) -> Result<Vec<StarredEntry>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GhStarsError::CacheNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let entries: Vec<StarredEntry> = serde_json::from_str(&contents)?;
    Ok(entries)
}

/// Replace the cache file with `entries` as indented JSON.
///
/// The data goes to a sibling temp file first and is renamed into place, so
/// the previous cache survives a failed or interrupted write.
pub fn save(path: &Path, entries: &[StarredEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!("wrote {} successfully.", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
