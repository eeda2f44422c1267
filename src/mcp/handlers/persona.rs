//! Small-talk tools: what_is_your_name, are_you_hr, wish_happy_diwali.
//!
//! Fixed replies; none of them touch the registry.

use serde_json::Value;

use super::McpToolResult;

pub const NAME_REPLY: &str = "My name is Shelton.";

pub const ROLE_REPLY: &str = "No, I am not an HR. I am the Chief of Staff.";

pub const RANGOLI: &str = r#"
        * * * * *
      *           *
    *    @     @    *
  *   @   #   #   @   *
* @   #   0   0   #   @ *
  *   @   #   #   @   *
    *    @     @    *
      *           *
        * * * * *

    "#;

pub fn handle_what_is_your_name(_args: &Value) -> McpToolResult {
    McpToolResult::text(NAME_REPLY)
}

pub fn handle_are_you_hr(_args: &Value) -> McpToolResult {
    McpToolResult::text(ROLE_REPLY)
}

pub fn handle_wish_happy_diwali(_args: &Value) -> McpToolResult {
    McpToolResult::text(RANGOLI)
}
