//! One-shot command dispatch: one verb, one RPC call.
//!
//! The verb table mirrors the daemon's full RPC surface. Unknown verbs and
//! verbs whose required argument is absent or non-numeric are silent
//! no-ops; nothing is sent in that case.

use serde_json::{Value, json};
use tracing::debug;
use zeprpc::RpcClient;

use crate::model::{AlbumRecord, ArtistRecord, FileRecord, decode_array};

/// A parsed command line: one verb, optionally one numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LibScan,
    LibList,
    LibArtists,
    LibAlbums,
    LibAlbumsByArtist(i64),
    LibAlbumFiles(i64),
    QueueList,
    QueueFile(i64),
    QueueAlbum(i64),
    Play,
    Pause,
    Stop,
    Prev,
    Next,
    SetVolume(i64),
    VolumeUp,
    VolumeDown,
}

impl Command {
    /// Map a verb token and optional argument token to a command.
    pub fn parse(verb: &str, arg: Option<&str>) -> Option<Command> {
        let num = arg.and_then(|a| a.parse::<i64>().ok());

        let command = match verb {
            "lib_scan" => Some(Command::LibScan),
            "lib_list" => Some(Command::LibList),
            "lib_artists" => Some(Command::LibArtists),
            "lib_albums" => Some(Command::LibAlbums),
            "lib_albums_by_artist" => num.map(Command::LibAlbumsByArtist),
            "lib_album_files" => num.map(Command::LibAlbumFiles),
            "queue_list" => Some(Command::QueueList),
            "queue" => num.map(Command::QueueFile),
            "queue_album" => num.map(Command::QueueAlbum),
            "play" => Some(Command::Play),
            "pause" => Some(Command::Pause),
            "stop" => Some(Command::Stop),
            "prev" => Some(Command::Prev),
            "next" => Some(Command::Next),
            "volume" => num.map(Command::SetVolume),
            "volume_up" => Some(Command::VolumeUp),
            "volume_down" => Some(Command::VolumeDown),
            _ => None,
        };

        if command.is_none() {
            debug!(verb, ?arg, "verb dropped");
        }

        command
    }

    /// RPC method name and parameter mapping for this command.
    pub fn request(&self) -> (&'static str, Value) {
        match *self {
            Command::LibScan => ("library_scan", json!({})),
            Command::LibList => ("library_list_files", json!({})),
            Command::LibArtists => ("library_get_artists", json!({})),
            Command::LibAlbums => ("library_get_albums", json!({})),
            Command::LibAlbumsByArtist(id) => {
                ("library_get_albums_by_artist", json!({ "artist_id": id }))
            }
            Command::LibAlbumFiles(id) => {
                ("library_get_files_of_album", json!({ "album_id": id }))
            }
            Command::QueueList => ("player_queue_get", json!({})),
            Command::QueueFile(id) => ("player_queue_file", json!({ "id": id })),
            Command::QueueAlbum(id) => ("player_queue_album", json!({ "id": id })),
            Command::Play => ("player_play", json!({})),
            Command::Pause => ("player_pause", json!({})),
            Command::Stop => ("player_stop", json!({})),
            Command::Prev => ("player_prev", json!({})),
            Command::Next => ("player_next", json!({})),
            Command::SetVolume(level) => ("player_set_volume", json!({ "level": level })),
            Command::VolumeUp => ("player_inc_volume", json!({})),
            Command::VolumeDown => ("player_dec_volume", json!({})),
        }
    }

    /// Execute the command: exactly one RPC call, then print whatever the
    /// verb displays. Control verbs print nothing.
    pub fn run(&self, client: &RpcClient) {
        let (method, params) = self.request();
        let result = client.call(method, params);

        match self {
            Command::LibList | Command::LibAlbumFiles(_) | Command::QueueList => {
                print_lines(file_lines(result));
            }
            Command::LibArtists => print_lines(artist_lines(result)),
            Command::LibAlbums | Command::LibAlbumsByArtist(_) => {
                print_lines(album_lines(result));
            }
            _ => {}
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// `id -> artist - title` when both tags are present, `id -> name`
/// otherwise.
fn file_lines(result: Option<Value>) -> Vec<String> {
    let Some(result) = result else {
        return Vec::new();
    };
    decode_array::<FileRecord>(result)
        .iter()
        .map(|file| format!("{} -> {}", file.id, file.description()))
        .collect()
}

fn artist_lines(result: Option<Value>) -> Vec<String> {
    let Some(result) = result else {
        return Vec::new();
    };
    decode_array::<ArtistRecord>(result)
        .iter()
        .map(|artist| {
            format!(
                "{} -> {} ({} albums, {} songs)",
                artist.id, artist.name, artist.albums, artist.songs
            )
        })
        .collect()
}

fn album_lines(result: Option<Value>) -> Vec<String> {
    let Some(result) = result else {
        return Vec::new();
    };
    decode_array::<AlbumRecord>(result)
        .iter()
        .map(|album| format!("{} -> {} ({} songs)", album.id, album.name, album.songs))
        .collect()
}
