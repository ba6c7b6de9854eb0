//! File-backed mirror of the pending-job queue.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, MirrorResult};

/// Name of the single well-known state file, qualified by the service it
/// mirrors so it cannot collide with other state in the host's data
/// directory.
const STATE_FILE: &str = "requeue_persist.PersistentQueue.txt";

/// Serializes the pending queue to one flat text file and reads it back.
///
/// One display name per line, newline-terminated, no header. Order on write
/// follows the queue and duplicates are kept; reads deduplicate and sort.
/// Not a durable store: writes truncate in place, and a failed write leaves
/// the previous contents behind.
pub struct QueueMirror {
    path: PathBuf,
}

impl QueueMirror {
    /// Mirror backed by the well-known file under `state_dir`.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(STATE_FILE),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file's contents with `text` in full.
    pub fn write(&self, text: &str) -> MirrorResult<()> {
        let write_err = |source| MirrorError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = File::create(&self.path).map_err(write_err)?;
        file.write_all(text.as_bytes()).map_err(write_err)
    }

    /// Read the file and return its non-empty lines, deduplicated and
    /// lexicographically sorted.
    pub fn read(&self) -> MirrorResult<BTreeSet<String>> {
        let contents = fs::read_to_string(&self.path).map_err(|source| MirrorError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }
}
