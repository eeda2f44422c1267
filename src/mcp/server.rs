//! MCP JSON-RPC protocol handler over stdio.
//!
//! Reads JSON-RPC requests from stdin, routes tool calls and resource reads,
//! and sends JSON-RPC responses to stdout. Implements the MCP protocol
//! methods: `initialize`, `ping`, `tools/list`, `tools/call`,
//! `resources/list`, `resources/templates/list`, `resources/read`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use super::handlers::{self, McpToolResult};
use super::{resources, tools};
use crate::config::ServerConfig;
use crate::registry::EmployeeRegistry;

const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC error codes
const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;
const INTERNAL_ERROR: i64 = -32603;
const RESOURCE_NOT_FOUND: i64 = -32002;

// ---------------------------------------------------------------------------
// JSON-RPC message types
// ---------------------------------------------------------------------------

/// Incoming JSON-RPC request.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    /// `None` only when the member is absent; `"id": null` is `Some(Null)`.
    #[serde(default, deserialize_with = "present_id")]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

fn present_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Outgoing JSON-RPC response.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// MCP Server
// ---------------------------------------------------------------------------

/// Shared server state.
pub struct McpServerState {
    server: ServerConfig,
    registry: Arc<EmployeeRegistry>,
}

impl McpServerState {
    pub fn new(server: ServerConfig, registry: Arc<EmployeeRegistry>) -> Self {
        Self { server, registry }
    }
}

/// Run the MCP server on stdin/stdout until stdin closes.
pub async fn run_server(state: McpServerState) -> std::io::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();

    info!(
        name = %state.server.name,
        version = %state.server.version,
        employees = state.registry.len(),
        "MCP server running on stdio"
    );
    serve(reader, &mut writer, &state).await?;
    info!("MCP server stdin closed, shutting down");
    Ok(())
}

/// Serve line-delimited JSON-RPC from `reader`, writing responses to
/// `writer`, until `reader` reaches EOF.
///
/// Requests are handled one at a time in arrival order. Notifications
/// (requests without an `id`) never produce output.
pub async fn serve<R, W>(reader: R, writer: &mut W, state: &McpServerState) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!("[MCP] Unparseable request: {}", e);
                let resp = JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                );
                write_response(writer, &resp).await;
                continue;
            }
        };

        // Valid JSON, but not a request object
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(req) => req,
            Err(e) => {
                warn!("[MCP] Malformed request: {}", e);
                let resp = JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                );
                write_response(writer, &resp).await;
                continue;
            }
        };

        // Validate JSON-RPC version
        if request.jsonrpc != "2.0" {
            if let Some(id) = request.id {
                let resp = JsonRpcResponse::error(id, INVALID_REQUEST, "Invalid JSON-RPC version");
                write_response(writer, &resp).await;
            }
            continue;
        }

        let response = handle_request(state, &request);

        // Notifications (no id) don't get a response
        if request.id.is_none() {
            continue;
        }
        if let Some(resp) = response {
            write_response(writer, &resp).await;
        }
    }

    Ok(())
}

/// Handle a single JSON-RPC request and return a response.
fn handle_request(state: &McpServerState, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
    let id = request.id.clone().unwrap_or(Value::Null);
    debug!("[MCP] <- {}", request.method);

    match request.method.as_str() {
        "initialize" => Some(handle_initialize(id, &state.server)),
        "initialized" | "notifications/initialized" => {
            info!("[MCP] Client sent 'initialized' notification");
            None
        }
        "notifications/cancelled" => {
            // Every request completes synchronously, so there is nothing to cancel.
            debug!("[MCP] Request cancelled: {:?}", request.params);
            None
        }
        "ping" => Some(JsonRpcResponse::success(id, json!({}))),
        "tools/list" => Some(handle_tools_list(id)),
        "tools/call" => Some(handle_tools_call(state, id, &request.params)),
        "resources/list" => Some(JsonRpcResponse::success(id, json!({ "resources": [] }))),
        "resources/templates/list" => Some(handle_resource_templates_list(id)),
        "resources/read" => Some(handle_resources_read(id, &request.params)),
        _ => Some(JsonRpcResponse::error(
            id,
            METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )),
    }
}

/// Handle `initialize` -- return server capabilities.
fn handle_initialize(id: Value, server: &ServerConfig) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": server.name,
                "version": server.version
            }
        }),
    )
}

/// Handle `tools/list` -- return every tool definition.
fn handle_tools_list(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(id, json!({ "tools": tools::list_tools() }))
}

/// Handle `tools/call` -- dispatch to the appropriate tool handler.
fn handle_tools_call(state: &McpServerState, id: Value, params: &Value) -> JsonRpcResponse {
    let tool_name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    if tool_name.is_empty() {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing tool name in params");
    }

    let result = route_tool_call(tool_name, &args, &state.registry);
    if result.is_error {
        warn!("[MCP] Tool {} failed: {:?}", tool_name, result.first_text());
    }

    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => {
            error!("[MCP] Failed to serialize tool result: {}", e);
            JsonRpcResponse::error(id, INTERNAL_ERROR, "Failed to serialize tool result")
        }
    }
}

/// Route a tool call to the appropriate handler module.
fn route_tool_call(name: &str, args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    match name {
        // ---- Leave tools ----
        "get_leave_balance" => handlers::leave::handle_get_leave_balance(args, registry),
        "apply_leave" => handlers::leave::handle_apply_leave(args, registry),
        "get_leave_history" => handlers::leave::handle_get_leave_history(args, registry),
        "get_all_employees" => handlers::leave::handle_get_all_employees(args, registry),
        "check_employee_data" => handlers::leave::handle_check_employee_data(args, registry),
        "process_sick_leave_with_policy" => {
            handlers::leave::handle_process_sick_leave(args, registry)
        }

        // ---- Persona tools ----
        "what_is_your_name" => handlers::persona::handle_what_is_your_name(args),
        "are_you_hr" => handlers::persona::handle_are_you_hr(args),
        "wish_happy_diwali" => handlers::persona::handle_wish_happy_diwali(args),

        _ => McpToolResult::error(format!("Unknown tool: {}", name)),
    }
}

/// Handle `resources/templates/list`.
fn handle_resource_templates_list(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({ "resourceTemplates": resources::list_templates() }),
    )
}

/// Handle `resources/read` -- resolve a URI against the templates.
fn handle_resources_read(id: Value, params: &Value) -> JsonRpcResponse {
    let uri = match params.get("uri").and_then(|v| v.as_str()) {
        Some(u) => u,
        None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing uri in params"),
    };

    match resources::read_resource(uri) {
        Some(contents) => JsonRpcResponse::success(id, json!({ "contents": [contents] })),
        None => JsonRpcResponse::error(
            id,
            RESOURCE_NOT_FOUND,
            format!("Resource not found: {}", uri),
        ),
    }
}

/// Write a JSON-RPC response (one line).
async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &JsonRpcResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let line = format!("{}\n", json);
            if let Err(e) = writer.write_all(line.as_bytes()).await {
                error!("[MCP] Failed to write response: {}", e);
            }
            if let Err(e) = writer.flush().await {
                error!("[MCP] Failed to flush stdout: {}", e);
            }
        }
        Err(e) => {
            error!("[MCP] Failed to serialize response: {}", e);
        }
    }
}
