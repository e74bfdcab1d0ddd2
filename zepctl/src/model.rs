//! Payload types of the Zeppelin RPC surface.
//!
//! Field shapes follow what the daemon actually sends; the wire carries a
//! few fields this client has no use for (`path`, `year`), which serde
//! skips silently.

use serde::Deserialize;
use serde_json::Value;

/// Playback state as encoded in the `state` field of `player_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum PlayerState {
    Stopped,
    Playing,
    Paused,
    /// Any state code this client does not know about.
    Unknown(i64),
}

impl From<i64> for PlayerState {
    fn from(code: i64) -> Self {
        match code {
            0 => PlayerState::Stopped,
            // PLAYING = 1 by contract
            1 => PlayerState::Playing,
            2 => PlayerState::Paused,
            other => PlayerState::Unknown(other),
        }
    }
}

/// Result payload of `player_status`. Recomputed on every poll, never
/// persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatus {
    pub state: PlayerState,
    /// Id of the file being played; null while stopped.
    #[serde(default)]
    pub current: Option<i64>,
    /// Seconds elapsed in the current file.
    #[serde(default)]
    pub position: i64,
    /// Master volume level.
    #[serde(default)]
    pub volume: i64,
}

/// One file entry of a queue or library listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Length in seconds.
    #[serde(default)]
    pub length: i64,
}

impl FileRecord {
    /// Human-readable description: `artist - title` when both are present
    /// and non-empty, the bare file name otherwise.
    pub fn description(&self) -> String {
        match (self.artist.as_deref(), self.title.as_deref()) {
            (Some(artist), Some(title)) if !artist.is_empty() && !title.is_empty() => {
                format!("{artist} - {title}")
            }
            _ => self.name.clone(),
        }
    }
}

/// One entry of `library_get_artists`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRecord {
    pub id: i64,
    pub name: String,
    /// Number of albums by this artist.
    #[serde(default)]
    pub albums: i64,
    /// Number of songs by this artist.
    #[serde(default)]
    pub songs: i64,
}

/// One entry of `library_get_albums` / `library_get_albums_by_artist`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRecord {
    pub id: i64,
    pub name: String,
    /// Artist id; absent in per-artist listings.
    #[serde(default)]
    pub artist: Option<i64>,
    #[serde(default)]
    pub songs: i64,
    /// Total length in seconds.
    #[serde(default)]
    pub length: i64,
}

/// Decode an array result leniently: entries that do not match the
/// expected shape are dropped rather than failing the whole listing.
pub fn decode_array<T: serde::de::DeserializeOwned>(result: Value) -> Vec<T> {
    match result {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_codes() {
        assert_eq!(PlayerState::from(0), PlayerState::Stopped);
        assert_eq!(PlayerState::from(1), PlayerState::Playing);
        assert_eq!(PlayerState::from(2), PlayerState::Paused);
        assert_eq!(PlayerState::from(7), PlayerState::Unknown(7));
    }

    #[test]
    fn test_status_deserialization() {
        let status: PlayerStatus = serde_json::from_value(json!({
            "state": 1,
            "current": 7,
            "position": 42,
            "volume": 80,
        }))
        .unwrap();

        assert_eq!(status.state, PlayerState::Playing);
        assert_eq!(status.current, Some(7));
        assert_eq!(status.position, 42);
        assert_eq!(status.volume, 80);
    }

    #[test]
    fn test_status_with_null_current() {
        // While stopped the daemon sends current: null.
        let status: PlayerStatus = serde_json::from_value(json!({
            "state": 0,
            "current": null,
            "position": 0,
            "volume": 80,
        }))
        .unwrap();

        assert_eq!(status.state, PlayerState::Stopped);
        assert_eq!(status.current, None);
    }

    #[test]
    fn test_file_description_with_tags() {
        let file: FileRecord = serde_json::from_value(json!({
            "id": 4,
            "name": "fugue.flac",
            "artist": "Bach",
            "title": "Fugue",
            "length": 240,
        }))
        .unwrap();

        assert_eq!(file.description(), "Bach - Fugue");
    }

    #[test]
    fn test_file_description_without_tags() {
        let file: FileRecord = serde_json::from_value(json!({
            "id": 3,
            "name": "track03.mp3",
            "artist": "",
            "title": "",
            "length": 180,
        }))
        .unwrap();

        assert_eq!(file.description(), "track03.mp3");
    }

    #[test]
    fn test_file_ignores_unknown_fields() {
        let file: FileRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "a.mp3",
            "path": "/music/a.mp3",
            "year": 1999,
            "length": 100,
        }))
        .unwrap();

        assert_eq!(file.id, 1);
    }

    #[test]
    fn test_decode_array_drops_bad_entries() {
        let records: Vec<FileRecord> = decode_array(json!([
            { "id": 1, "name": "a.mp3", "length": 10 },
            { "name": "missing id" },
            { "id": 2, "name": "b.mp3", "length": 20 },
        ]));

        let ids: Vec<i64> = records.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_decode_array_of_non_array() {
        let records: Vec<FileRecord> = decode_array(json!({ "not": "an array" }));
        assert!(records.is_empty());
    }
}
