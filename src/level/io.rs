//! Level file loading and saving

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::{level_to_xml, parse_level, Level, LoadError, MotionSettings};

/// Error type for level file operations
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Load(#[from] LoadError),
}

/// Load a level from an XML file
///
/// On success the level remembers `path` as its file name.
pub fn load_level<P: AsRef<Path>>(path: P, settings: &MotionSettings) -> Result<Level, LevelError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut level = parse_level(&text, settings)?;
    level.file_name = Some(path.to_path_buf());
    info!(path = %path.display(), name = %level.name, "loaded level");
    Ok(level)
}

/// Save a level to an XML file
///
/// The document is written next to `path` first and renamed over it, so a
/// failed save leaves any existing file intact. `file_name` only changes once
/// the rename succeeds.
pub fn save_level<P: AsRef<Path>>(level: &mut Level, path: P) -> Result<(), LevelError> {
    let path = path.as_ref();
    let xml = level_to_xml(level);
    let temp = temp_path(path);

    if let Err(e) = fs::write(&temp, xml.as_bytes()).and_then(|()| fs::rename(&temp, path)) {
        if temp.exists() {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), error = %cleanup, "failed to remove partial save");
            }
        }
        return Err(e.into());
    }

    level.file_name = Some(path.to_path_buf());
    info!(path = %path.display(), entities = level.entities().len(), "saved level");
    Ok(())
}

/// `level.xml` -> `.level.xml.tmp` in the same directory
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "level".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
