//! The status display loop.
//!
//! One tick per poll interval: erase the previous line, snapshot the queue,
//! poll `player_status`, render one line, flush, sleep. Nothing in here is
//! fatal; a bad tick degrades the display and the next tick starts clean.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use serde_json::json;
use tracing::debug;
use zeprpc::RpcClient;

use crate::model::{PlayerState, PlayerStatus};
use crate::queue::QueueCache;

/// Width of the blank padding used to erase the previous line.
const ERASE_WIDTH: usize = 79;

/// Format a number of seconds as zero-padded minutes and seconds.
pub fn format_secs(secs: i64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Decide the status line for one tick.
///
/// The queue is snapshotted before the status poll, so the current id can
/// be missing from the cache when the queue changed in between; that race
/// degrades to "not playing" instead of failing the tick.
pub fn render(status: Option<&PlayerStatus>, queue: &QueueCache) -> String {
    let Some(status) = status else {
        return "player not available".to_string();
    };

    if status.state != PlayerState::Playing {
        return "not playing".to_string();
    }

    match status.current.and_then(|id| queue.get(id)) {
        Some(file) => format!(
            "{} - {}/{}",
            file.name,
            format_secs(status.position),
            format_secs(file.length)
        ),
        None => "not playing".to_string(),
    }
}

/// Poll `player_status`; transport failure or a malformed payload is "no
/// status".
pub fn poll_status(client: &RpcClient) -> Option<PlayerStatus> {
    let result = client.call("player_status", json!({}))?;
    serde_json::from_value(result).ok()
}

/// Run the display loop forever.
///
/// Only stops when the process is terminated or stdout goes away.
pub fn run(client: &RpcClient, poll_interval: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut queue = QueueCache::new();

    loop {
        // Erase the previous line first so a shorter new line does not
        // leave artifacts of a longer old one.
        write!(stdout, "\r{}\r", " ".repeat(ERASE_WIDTH))?;

        queue.refresh(client);
        let status = poll_status(client);
        let line = render(status.as_ref(), &queue);
        debug!(%line, queued = queue.len(), "tick");

        // No trailing newline; the next tick overwrites this line in place.
        write!(stdout, "{line}")?;
        stdout.flush()?;

        thread::sleep(poll_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileRecord, decode_array};
    use serde_json::json;

    fn cache_from(result: serde_json::Value) -> QueueCache {
        decode_array::<FileRecord>(result).into_iter().collect()
    }

    fn playing(current: i64, position: i64) -> PlayerStatus {
        serde_json::from_value(json!({
            "state": 1,
            "current": current,
            "position": position,
            "volume": 80,
        }))
        .unwrap()
    }

    #[test]
    fn test_format_secs() {
        assert_eq!(format_secs(125), "02:05");
        assert_eq!(format_secs(59), "00:59");
        assert_eq!(format_secs(3600), "60:00");
        assert_eq!(format_secs(0), "00:00");
    }

    #[test]
    fn test_render_playing_file_in_cache() {
        let queue = cache_from(json!([{ "id": 7, "name": "X", "length": 180 }]));
        let status = playing(7, 42);

        assert_eq!(render(Some(&status), &queue), "X - 00:42/03:00");
    }

    #[test]
    fn test_render_cache_miss_degrades() {
        // Queue changed between the queue snapshot and the status poll.
        let queue = cache_from(json!([{ "id": 7, "name": "X", "length": 180 }]));
        let status = playing(9, 10);

        assert_eq!(render(Some(&status), &queue), "not playing");
    }

    #[test]
    fn test_render_no_status() {
        assert_eq!(render(None, &QueueCache::new()), "player not available");
    }

    #[test]
    fn test_render_stopped() {
        let status: PlayerStatus = serde_json::from_value(json!({
            "state": 0,
            "current": null,
            "position": 0,
            "volume": 80,
        }))
        .unwrap();

        assert_eq!(render(Some(&status), &QueueCache::new()), "not playing");
    }

    #[test]
    fn test_render_paused_is_not_playing() {
        let queue = cache_from(json!([{ "id": 7, "name": "X", "length": 180 }]));
        let status: PlayerStatus = serde_json::from_value(json!({
            "state": 2,
            "current": 7,
            "position": 42,
            "volume": 80,
        }))
        .unwrap();

        assert_eq!(render(Some(&status), &queue), "not playing");
    }

    #[test]
    fn test_render_playing_without_current_id() {
        // PLAYING with a null current id must not panic.
        let status: PlayerStatus = serde_json::from_value(json!({
            "state": 1,
            "current": null,
            "position": 5,
            "volume": 80,
        }))
        .unwrap();

        assert_eq!(render(Some(&status), &QueueCache::new()), "not playing");
    }
}
