use std::fs;
use std::path::PathBuf;

use log::info;
use wordaxis_core::{
    decode_record, encode_record, CompletionRecord, LastPlayedStore, StoreError, LAST_PLAYED_KEY,
};

pub fn resolve_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    let file_name = format!(".{LAST_PLAYED_KEY}");
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// File-backed completion marker. One rkyv-encoded record per file;
/// unreadable or stale-version blobs read as absent.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Option<CompletionRecord> {
        let bytes = fs::read(&self.path).ok()?;
        decode_record(&bytes)
    }
}

impl LastPlayedStore for FileStore {
    fn record_last_played(&mut self, stamp: &str) -> Result<(), StoreError> {
        let record = CompletionRecord::new(stamp);
        let bytes = encode_record(&record).ok_or(StoreError::Encode)?;
        fs::write(&self.path, &bytes).map_err(|err| StoreError::Write(err.to_string()))?;
        info!("recorded last played \"{}\" at {}", stamp, self.path.display());
        Ok(())
    }
}
