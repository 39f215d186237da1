use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use modelfetch::{FetchEvent, Fetcher, FetcherBuilder};

pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Deterministic, non-repeating-looking content of `len` bytes.
pub fn content(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

pub fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, data).unwrap();
}

/// Owned copy of the fetch events a callback saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Checking { transferred: bool },
    Verified,
    Mismatch,
    Transferring { overwrite: bool },
    Progress { received: u64, total: Option<u64> },
    Transferred { bytes: u64 },
}

/// A hidden fetcher recording every event it emits.
pub fn recording_fetcher(builder: FetcherBuilder) -> (Fetcher, Arc<Mutex<Vec<Seen>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fetcher = builder
        .on_event(move |event| {
            let entry = match *event {
                FetchEvent::Checking { transferred, .. } => Seen::Checking { transferred },
                FetchEvent::Verified { .. } => Seen::Verified,
                FetchEvent::Mismatch { .. } => Seen::Mismatch,
                FetchEvent::Transferring { overwrite, .. } => Seen::Transferring { overwrite },
                FetchEvent::Progress { received, total } => Seen::Progress { received, total },
                FetchEvent::Transferred { bytes, .. } => Seen::Transferred { bytes },
            };
            sink.lock().unwrap().push(entry);
        })
        .build();
    (fetcher, seen)
}

pub fn progress_of(seen: &[Seen]) -> Vec<(u64, Option<u64>)> {
    seen.iter()
        .filter_map(|s| match *s {
            Seen::Progress { received, total } => Some((received, total)),
            _ => None,
        })
        .collect()
}
