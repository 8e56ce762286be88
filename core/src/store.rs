use std::fmt;

use rkyv::rancor::Error as RancorError;

/// Storage key for the completion marker.
pub const LAST_PLAYED_KEY: &str = "wordaxisLastPlayed";

pub const COMPLETION_RECORD_VERSION: u32 = 1;

/// The one durable record: the date the final set was completed. Versioned
/// so a future layout change reads old blobs as absent rather than garbage.
#[derive(Clone, Debug, PartialEq, Eq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct CompletionRecord {
    pub version: u32,
    pub last_played: String,
}

impl CompletionRecord {
    pub fn new(stamp: &str) -> Self {
        Self {
            version: COMPLETION_RECORD_VERSION,
            last_played: stamp.to_string(),
        }
    }
}

pub fn encode_record(record: &CompletionRecord) -> Option<Vec<u8>> {
    rkyv::to_bytes::<RancorError>(record)
        .ok()
        .map(|bytes| bytes.into_vec())
}

pub fn decode_record(bytes: &[u8]) -> Option<CompletionRecord> {
    let record = rkyv::from_bytes::<CompletionRecord, RancorError>(bytes).ok()?;
    if record.version != COMPLETION_RECORD_VERSION {
        return None;
    }
    Some(record)
}

#[derive(Debug)]
pub enum StoreError {
    Encode,
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Encode => write!(f, "failed to encode completion record"),
            StoreError::Write(detail) => write!(f, "failed to write completion record: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Durable-storage port. The engine calls this exactly once, when the final
/// set is finished; wiring decides where the marker actually lands.
pub trait LastPlayedStore {
    fn record_last_played(&mut self, stamp: &str) -> Result<(), StoreError>;
}

/// In-memory store used by tests and headless wiring.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub writes: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_played(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl LastPlayedStore for MemoryStore {
    fn record_last_played(&mut self, stamp: &str) -> Result<(), StoreError> {
        self.writes.push(stamp.to_string());
        Ok(())
    }
}
