//! Read-only resources addressed by URI template.
//!
//! Only one template exists, `greeting://{name}`. The name is a non-empty run
//! of characters other than `/`, taken verbatim (no percent-decoding).

use serde::Serialize;

pub const GREETING_TEMPLATE: &str = "greeting://{name}";
const GREETING_SCHEME: &str = "greeting://";

/// Entry in `resources/templates/list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplate {
    pub uri_template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

/// Entry in the `contents` array of `resources/read`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

pub fn list_templates() -> Vec<ResourceTemplate> {
    vec![ResourceTemplate {
        uri_template: GREETING_TEMPLATE,
        name: "greeting",
        description: "Get a personalized greeting",
        mime_type: "text/plain",
    }]
}

pub fn greeting(name: &str) -> String {
    format!(
        "Hello, {}! How can I assist you with leave management today?",
        name
    )
}

/// Resolve `uri` against the known templates.
pub fn read_resource(uri: &str) -> Option<ResourceContents> {
    let name = greeting_name(uri)?;
    Some(ResourceContents {
        uri: uri.to_string(),
        mime_type: "text/plain",
        text: greeting(name),
    })
}

fn greeting_name(uri: &str) -> Option<&str> {
    let name = uri.strip_prefix(GREETING_SCHEME)?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}
