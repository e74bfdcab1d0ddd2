//! JSON-RPC 2.0 client for the Zeppelin player daemon.
//!
//! The daemon exposes its whole control surface (library, queue, playback)
//! as JSON-RPC 2.0 over a single HTTP endpoint. This crate provides the
//! blocking transport for it: one POST per call, the full response body is
//! read before returning, and every failure collapses to "no result" so the
//! caller only has to pattern-match on an `Option`.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use zeprpc::RpcClient;
//!
//! let client = RpcClient::default();
//! match client.call("player_status", json!({})) {
//!     Some(status) => println!("{status}"),
//!     None => println!("player not available"),
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod error;

pub use client::RpcClient;
pub use envelope::RpcRequest;
pub use error::{Result, RpcError};

use std::time::Duration;

/// Default endpoint of the Zeppelin RPC server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Default timeout for HTTP requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
