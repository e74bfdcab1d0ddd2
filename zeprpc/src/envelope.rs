//! JSON-RPC 2.0 wire envelope.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, RpcError};

/// Protocol version tag sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Call id used for every request.
///
/// Calls are strictly sequential, so no correlation of in-flight requests
/// is needed and the id never changes.
pub const CALL_ID: u64 = 1;

/// A single JSON-RPC 2.0 request. Built fresh per call, never reused.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub id: u64,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(method: &str, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.to_string(),
            id: CALL_ID,
            params,
        }
    }
}

/// Extract the `result` field from a JSON-RPC response body.
///
/// The `error` field is deliberately not consulted: absence of a usable
/// `result` is the only signal callers check, and an explicit `null` result
/// collapses to the same "no result" outcome.
pub fn extract_result(body: &str) -> Result<Value> {
    let mut data: Map<String, Value> = serde_json::from_str(body)?;
    match data.remove("result") {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(RpcError::NoResult),
    }
}
