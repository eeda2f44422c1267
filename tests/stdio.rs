//! End-to-end MCP session over in-memory stdio buffers.

use std::sync::Arc;

use serde_json::{json, Value};
use shelton_lib::config::ServerConfig;
use shelton_lib::mcp::server::{serve, McpServerState};
use shelton_lib::registry::EmployeeRegistry;

async fn run_session(registry: Arc<EmployeeRegistry>, requests: &[Value]) -> Vec<Value> {
    let state = McpServerState::new(ServerConfig::default(), registry);
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    let mut output: Vec<u8> = Vec::new();

    serve(input.as_bytes(), &mut output, &state).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn call(id: u64, tool: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": tool, "arguments": arguments }
    })
}

fn tool_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn test_handshake_and_discovery() {
    let registry = Arc::new(EmployeeRegistry::with_default_seed());
    let responses = run_session(
        registry,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "test-client", "version": "0.0.1" }
            }}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "resources/templates/list"}),
            json!({"jsonrpc": "2.0", "id": 4, "method": "resources/list"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "Shelton");

    let names: Vec<&str> = responses[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "get_leave_balance",
            "apply_leave",
            "get_leave_history",
            "get_all_employees",
            "check_employee_data",
            "process_sick_leave_with_policy",
            "what_is_your_name",
            "are_you_hr",
            "wish_happy_diwali",
        ]
    );

    assert_eq!(
        responses[2]["result"]["resourceTemplates"][0]["uriTemplate"],
        "greeting://{name}"
    );
    assert_eq!(responses[3]["result"]["resources"], json!([]));
}

#[tokio::test]
async fn test_leave_workflow() {
    let registry = Arc::new(EmployeeRegistry::with_default_seed());
    let twenty_one: Vec<String> = (1..=21).map(|d| format!("2025-01-{:02}", d)).collect();

    let responses = run_session(
        Arc::clone(&registry),
        &[
            call(1, "get_all_employees", json!({})),
            call(2, "apply_leave", json!({
                "employee_name": "Kunal",
                "leave_dates": ["2025-04-17", "2025-05-01"]
            })),
            call(3, "get_leave_balance", json!({ "employee_name": "Kunal" })),
            call(4, "get_leave_history", json!({ "employee_name": "Kunal" })),
            call(5, "apply_leave", json!({ "employee_name": "Rohit", "leave_dates": twenty_one })),
            call(6, "get_leave_history", json!({ "employee_name": "Rohit" })),
            call(7, "get_leave_balance", json!({ "employee_name": "Amit" })),
            call(8, "process_sick_leave_with_policy", json!({ "employee_name": "Rohit", "num_days": 3 })),
            call(9, "check_employee_data", json!({ "employee_name": "Kunal" })),
        ],
    )
    .await;

    assert_eq!(responses.len(), 9);
    let texts: Vec<&str> = responses.iter().map(tool_text).collect();
    assert_eq!(texts[0], "Kunal, Rohit");
    assert_eq!(texts[1], "Leave applied for 2 day(s). Remaining balance: 16.");
    assert_eq!(texts[2], "Kunal has 16 leave days remaining.");
    assert_eq!(
        texts[3],
        "Leave history for Kunal: 2024-12-25, 2025-01-01, 2025-04-17, 2025-05-01"
    );
    assert_eq!(
        texts[4],
        "Insufficient leave balance. You requested 21 day(s) but have only 20."
    );
    assert_eq!(texts[5], "Leave history for Rohit: No leaves taken.");
    assert_eq!(texts[6], "Employee not found.");
    assert_eq!(
        texts[7],
        "Sick leave applied for 3 day(s). Remaining balance: 17. Sick leave policy: N/A"
    );
    assert_eq!(texts[8], "Kunal - Department: N/A, Manager: N/A");

    // Refusals are plain text, not protocol errors.
    assert!(responses.iter().all(|r| r["result"]["isError"] == false));

    let rohit = registry.get("Rohit").unwrap();
    assert_eq!(rohit.balance, 17);
    assert!(rohit.history.is_empty());
}

#[tokio::test]
async fn test_small_talk_and_greeting() {
    let registry = Arc::new(EmployeeRegistry::with_default_seed());
    let responses = run_session(
        registry,
        &[
            call(1, "what_is_your_name", json!({})),
            call(2, "are_you_hr", json!({})),
            call(3, "wish_happy_diwali", json!({})),
            json!({"jsonrpc": "2.0", "id": 4, "method": "resources/read",
                   "params": { "uri": "greeting://Meera" }}),
        ],
    )
    .await;

    assert_eq!(tool_text(&responses[0]), "My name is Shelton.");
    assert_eq!(
        tool_text(&responses[1]),
        "No, I am not an HR. I am the Chief of Staff."
    );
    assert!(tool_text(&responses[2]).contains("@   #   0   0   #   @"));
    assert_eq!(
        responses[3]["result"]["contents"][0]["text"],
        "Hello, Meera! How can I assist you with leave management today?"
    );
}

#[tokio::test]
async fn test_bad_arguments_are_flagged() {
    let registry = Arc::new(EmployeeRegistry::with_default_seed());
    let responses = run_session(
        Arc::clone(&registry),
        &[
            call(1, "apply_leave", json!({ "employee_name": "Rohit" })),
            call(2, "process_sick_leave_with_policy", json!({ "employee_name": "Rohit", "num_days": 1.5 })),
            call(3, "get_leave_balance", json!({})),
        ],
    )
    .await;

    assert!(responses.iter().all(|r| r["result"]["isError"] == true));
    assert_eq!(registry.leave_balance("Rohit"), Ok(20));
}

#[tokio::test]
async fn test_integral_float_day_count_accepted() {
    let registry = Arc::new(EmployeeRegistry::with_default_seed());
    let responses = run_session(
        Arc::clone(&registry),
        &[call(1, "process_sick_leave_with_policy", json!({ "employee_name": "Rohit", "num_days": 2.0 }))],
    )
    .await;

    assert_eq!(responses[0]["result"]["isError"], false);
    assert_eq!(
        tool_text(&responses[0]),
        "Sick leave applied for 2 day(s). Remaining balance: 18. Sick leave policy: N/A"
    );
    assert_eq!(registry.leave_balance("Rohit"), Ok(18));
}
