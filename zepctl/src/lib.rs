//! Remote control for the Zeppelin player daemon.
//!
//! Two binaries share this crate:
//! - `zepctl` maps one command verb to one RPC call (library, queue and
//!   playback commands);
//! - `zepstatus` runs the fixed-interval status loop that keeps a single
//!   terminal line up to date with what the player is doing.
//!
//! The daemon itself (library scanner, playback engine) is an external
//! process reached through [`zeprpc`].

pub mod commands;
pub mod config;
pub mod model;
pub mod queue;
pub mod status;

pub use commands::Command;
pub use config::Config;
pub use model::{AlbumRecord, ArtistRecord, FileRecord, PlayerState, PlayerStatus};
pub use queue::QueueCache;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber on stderr.
///
/// Logs go to stderr so the status line on stdout is never corrupted.
/// Default level is "info"; `RUST_LOG` overrides it.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
