pub mod config;
pub mod mcp;
pub mod registry;
pub mod services;
