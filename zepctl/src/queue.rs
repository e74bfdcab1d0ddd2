//! Per-tick snapshot of the player queue.

use std::collections::HashMap;

use serde_json::json;
use zeprpc::RpcClient;

use crate::model::{FileRecord, decode_array};

/// Snapshot of the player queue, keyed by file id.
///
/// Rebuilt from scratch on every refresh: a failed or empty call yields an
/// empty map, never a partial or stale one. Consumers only read.
#[derive(Debug, Default)]
pub struct QueueCache {
    files: HashMap<i64, FileRecord>,
}

impl QueueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with the server's current queue.
    pub fn refresh(&mut self, client: &RpcClient) {
        *self = match client.call("player_queue_get", json!({})) {
            Some(result) => decode_array::<FileRecord>(result).into_iter().collect(),
            None => Self::default(),
        };
    }

    pub fn get(&self, id: i64) -> Option<&FileRecord> {
        self.files.get(&id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<FileRecord> for QueueCache {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(|file| (file.id, file)).collect(),
        }
    }
}
