use crate::{IconError, Result};
use icon_types::{AppIconContents, CONTENTS_FILE};
use std::path::{Path, PathBuf};

/// Write `Contents.json` into `dir`, replacing any previous manifest.
pub fn write_contents(dir: &Path, contents: &AppIconContents) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(contents)?;
    std::fs::create_dir_all(dir).map_err(|e| IconError::write(dir, e))?;
    let path = dir.join(CONTENTS_FILE);
    std::fs::write(&path, json).map_err(|e| IconError::write(&path, e))?;
    log::debug!("wrote manifest {} ({} images)", path.display(), contents.images.len());
    Ok(path)
}
