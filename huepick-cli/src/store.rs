/// Session persistence: one JSON file pairing the engine snapshot with the
/// palette it was built from.
///
/// The engine snapshot records ratings and membership but no display
/// attributes, so the file also carries the palette. Resuming rebuilds the
/// session from the palette and overlays the snapshot, which reproduces the
/// exact colors the chooser was looking at.
use std::io;
use std::path::Path;

use huepick_core::{ColorItem, SessionSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub max_rounds: usize,
    pub palette: Vec<ColorItem>,
    pub snapshot: SessionSnapshot,
}

/// Write a session file, pretty-printed so it diffs and reads sanely.
pub fn save(path: &Path, saved: &SavedSession) -> io::Result<()> {
    let json = serde_json::to_string_pretty(saved)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Read a session file back. All failures reduce to one readable message.
pub fn load(path: &Path) -> Result<SavedSession, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read session file {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Session file {} is not usable: {e}", path.display()))
}
