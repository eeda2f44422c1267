//! MCP tool handler implementations.
//!
//! Each module implements a group of related tools:
//! - `leave`   -- Leave registry tools (balance, apply, history, roster, employee data, sick leave)
//! - `persona` -- Fixed small-talk replies (name, role, Diwali greeting)

pub mod leave;
pub mod persona;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result type returned by all MCP tool handlers.
///
/// Matches the MCP protocol's tool result format:
/// ```json
/// {
///   "content": [{ "type": "text", "text": "..." }],
///   "isError": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolResult {
    pub content: Vec<McpContent>,
    /// Set only for calls the server could not interpret (bad arguments,
    /// unknown tool). Refused leave requests are ordinary text.
    #[serde(rename = "isError", default)]
    pub is_error: bool,
}

/// A single content item in an MCP tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum McpContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl McpToolResult {
    /// Create a successful text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Create an error text result.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// Text of the first content item.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| match c {
            McpContent::Text { text } => text.as_str(),
        })
    }
}

/// Fetch a required string argument.
fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, McpToolResult> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpToolResult::error(format!("Error: {} is required (string)", key)))
}

/// Fetch a required integer argument.
///
/// Integral floats such as `2.0` are accepted; `1.5` is not.
fn required_i64(args: &Value, key: &str) -> Result<i64, McpToolResult> {
    args.get(key)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().and_then(integral)))
        .ok_or_else(|| McpToolResult::error(format!("Error: {} is required (integer)", key)))
}

fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

/// Fetch a required array-of-strings argument.
fn required_str_list(args: &Value, key: &str) -> Result<Vec<String>, McpToolResult> {
    let invalid = || McpToolResult::error(format!("Error: {} is required (array of strings)", key));
    args.get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
