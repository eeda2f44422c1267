//! Leave registry tools: get_leave_balance, apply_leave, get_leave_history,
//! get_all_employees, check_employee_data, process_sick_leave_with_policy.
//!
//! Each handler decodes its arguments, runs one registry operation and
//! renders the outcome as text. A refused request (unknown employee,
//! insufficient balance) is rendered from the error's `Display` and is not
//! flagged `isError`: callers read the sentence to tell outcomes apart.

use serde_json::Value;

use super::{required_i64, required_str, required_str_list, McpToolResult};
use crate::registry::{EmployeeRegistry, LeaveApplied, SickLeaveApplied};

const NO_LEAVES: &str = "No leaves taken.";

pub fn handle_get_leave_balance(args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    let name = match required_str(args, "employee_name") {
        Ok(n) => n,
        Err(e) => return e,
    };

    match registry.leave_balance(name) {
        Ok(balance) => McpToolResult::text(format!(
            "{} has {} leave days remaining.",
            name, balance
        )),
        Err(e) => McpToolResult::text(e.to_string()),
    }
}

pub fn handle_apply_leave(args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    let name = match required_str(args, "employee_name") {
        Ok(n) => n,
        Err(e) => return e,
    };
    let dates = match required_str_list(args, "leave_dates") {
        Ok(d) => d,
        Err(e) => return e,
    };

    match registry.apply_leave(name, &dates) {
        Ok(applied) => McpToolResult::text(render_leave_applied(&applied)),
        Err(e) => McpToolResult::text(e.to_string()),
    }
}

pub fn handle_get_leave_history(args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    let name = match required_str(args, "employee_name") {
        Ok(n) => n,
        Err(e) => return e,
    };

    match registry.leave_history(name) {
        Ok(history) => {
            let rendered = if history.is_empty() {
                NO_LEAVES.to_string()
            } else {
                history.join(", ")
            };
            McpToolResult::text(format!("Leave history for {}: {}", name, rendered))
        }
        Err(e) => McpToolResult::text(e.to_string()),
    }
}

pub fn handle_get_all_employees(_args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    McpToolResult::text(registry.employee_names().join(", "))
}

pub fn handle_check_employee_data(args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    let name = match required_str(args, "employee_name") {
        Ok(n) => n,
        Err(e) => return e,
    };

    match registry.employee_profile(name) {
        Ok(profile) => McpToolResult::text(format!(
            "{} - Department: {}, Manager: {}",
            name,
            profile.department_or_default(),
            profile.manager_or_default()
        )),
        Err(e) => McpToolResult::text(e.to_string()),
    }
}

pub fn handle_process_sick_leave(args: &Value, registry: &EmployeeRegistry) -> McpToolResult {
    let name = match required_str(args, "employee_name") {
        Ok(n) => n,
        Err(e) => return e,
    };
    let num_days = match required_i64(args, "num_days") {
        Ok(n) => n,
        Err(e) => return e,
    };

    match registry.process_sick_leave(name, num_days) {
        Ok(applied) => McpToolResult::text(render_sick_leave_applied(&applied)),
        Err(e) => McpToolResult::text(e.to_string()),
    }
}

fn render_leave_applied(applied: &LeaveApplied) -> String {
    format!(
        "Leave applied for {} day(s). Remaining balance: {}.",
        applied.days, applied.remaining
    )
}

fn render_sick_leave_applied(applied: &SickLeaveApplied) -> String {
    format!(
        "Sick leave applied for {} day(s). Remaining balance: {}. Sick leave policy: {}",
        applied.days, applied.remaining, applied.policy
    )
}
