//! One-shot remote commands for the Zeppelin player.
//!
//! Usage: `zepctl <verb> [n]` — one positional verb, one optional numeric
//! argument (required by `queue`, `queue_album`, `lib_albums_by_artist`,
//! `lib_album_files` and `volume`). Exits with status 1 when no verb is
//! given; unknown verbs and missing arguments are silent no-ops.

use std::env;
use std::process::ExitCode;

use zepctl::{Command, Config};

fn main() -> ExitCode {
    zepctl::init_tracing();

    let mut args = env::args().skip(1);
    let Some(verb) = args.next() else {
        return ExitCode::from(1);
    };
    let arg = args.next();

    let config = Config::from_env();
    if let Some(command) = Command::parse(&verb, arg.as_deref()) {
        command.run(&config.client());
    }

    ExitCode::SUCCESS
}
