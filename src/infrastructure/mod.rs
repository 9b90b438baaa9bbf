//! Gateway adapters: a deterministic in-process sandbox and an HTTP client.

pub mod http;
pub mod sandbox;
