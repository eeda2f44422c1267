//! Tool catalog returned by `tools/list`.

use serde::Serialize;
use serde_json::{json, Value};

/// Tool definition as serialized in `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn employee_name_property() -> Value {
    json!({
        "type": "string",
        "description": "Employee name, exactly as stored (case-sensitive)"
    })
}

fn no_arguments() -> Value {
    json!({ "type": "object", "properties": {} })
}

/// All tools, in the order clients see them.
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_leave_balance",
            description: "Check how many leave days are left for the employee by name",
            input_schema: json!({
                "type": "object",
                "properties": { "employee_name": employee_name_property() },
                "required": ["employee_name"]
            }),
        },
        ToolDefinition {
            name: "apply_leave",
            description: "Apply leave for specific dates (e.g., [\"2025-04-17\", \"2025-05-01\"]). \
                          One leave day is deducted per date; the request is rejected as a whole \
                          if the balance cannot cover it.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "employee_name": employee_name_property(),
                    "leave_dates": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Dates to take off, e.g. 2025-04-17"
                    }
                },
                "required": ["employee_name", "leave_dates"]
            }),
        },
        ToolDefinition {
            name: "get_leave_history",
            description: "Get leave history for the employee",
            input_schema: json!({
                "type": "object",
                "properties": { "employee_name": employee_name_property() },
                "required": ["employee_name"]
            }),
        },
        ToolDefinition {
            name: "get_all_employees",
            description: "List the names of all employees",
            input_schema: no_arguments(),
        },
        ToolDefinition {
            name: "check_employee_data",
            description: "Get the department and manager of the employee",
            input_schema: json!({
                "type": "object",
                "properties": { "employee_name": employee_name_property() },
                "required": ["employee_name"]
            }),
        },
        ToolDefinition {
            name: "process_sick_leave_with_policy",
            description: "Deduct sick leave days from the employee's balance and report the \
                          sick leave policy. Sick leave dates are not recorded in the history.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "employee_name": employee_name_property(),
                    "num_days": {
                        "type": "integer",
                        "description": "Number of sick leave days"
                    }
                },
                "required": ["employee_name", "num_days"]
            }),
        },
        ToolDefinition {
            name: "what_is_your_name",
            description: "Return the name of this assistant",
            input_schema: no_arguments(),
        },
        ToolDefinition {
            name: "are_you_hr",
            description: "Respond to role inquiry",
            input_schema: no_arguments(),
        },
        ToolDefinition {
            name: "wish_happy_diwali",
            description: "Wish a happy Diwali with a rangoli drawing",
            input_schema: no_arguments(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_tools() {
        let tools = list_tools();
        assert_eq!(tools.len(), 9);

        let names: HashSet<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 9, "tool names must be unique");
        assert!(names.contains("apply_leave"));
        assert!(names.contains("process_sick_leave_with_policy"));
    }

    #[test]
    fn test_required_fields_are_declared() {
        for tool in list_tools() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
            if let Some(required) = tool.input_schema["required"].as_array() {
                for field in required {
                    let field = field.as_str().unwrap();
                    assert!(
                        tool.input_schema["properties"].get(field).is_some(),
                        "{} requires undeclared {}",
                        tool.name,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn test_serialize_uses_camel_case_schema_key() {
        let json = serde_json::to_value(&list_tools()[0]).unwrap();
        assert!(json.get("inputSchema").is_some());
        assert!(json.get("input_schema").is_none());
    }
}
