use super::snapshot::TrackerSnapshot;
use crate::error::FileError;
use crate::helpers::write_file_atomic;
use std::fs;
use std::path::Path;

pub fn load_snapshot(path: &Path) -> Result<TrackerSnapshot, FileError> {
    let data = fs::read_to_string(path)?;
    let snapshot: TrackerSnapshot = serde_json::from_str(&data)?;

    Ok(snapshot)
}

pub async fn save_snapshot(snapshot: &TrackerSnapshot, path: &Path) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(snapshot)?;

    write_file_atomic(path.to_owned(), json.as_bytes()).await
}
