//! Single-line status display for the Zeppelin player.
//!
//! Overwrites one stdout line in place, once per poll interval, with the
//! currently playing file and its elapsed/total time. Runs until the
//! process is terminated.

use anyhow::Result;

use zepctl::{Config, status};

fn main() -> Result<()> {
    zepctl::init_tracing();

    let config = Config::from_env();
    let client = config.client();

    status::run(&client, config.poll_interval)?;
    Ok(())
}
