//! MCP (Model Context Protocol) server implementation.
//!
//! Provides a JSON-RPC over stdio server that exposes the leave registry to
//! MCP clients as tools, plus a templated greeting resource.
//!
//! Architecture:
//! - `server.rs`    -- JSON-RPC protocol handler (stdin/stdout)
//! - `tools.rs`     -- Tool catalog for `tools/list`
//! - `resources.rs` -- Resource templates and `resources/read`
//! - `handlers/`    -- Tool handler implementations (leave, persona)

pub mod handlers;
pub mod resources;
pub mod server;
pub mod tools;
