//! Employee record and the built-in seed roster.

use serde::{Deserialize, Serialize};

/// Rendered in place of any informational field that is not on record.
pub const PLACEHOLDER: &str = "N/A";

/// Leave state for one employee.
///
/// `department`, `manager` and `sick_leave_policy` are informational only;
/// none of the leave operations read them except to echo them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Remaining leave days.
    pub balance: i64,
    /// Dates leave was taken on, oldest first. Append-only.
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default)]
    pub sick_leave_policy: Option<String>,
}

impl EmployeeRecord {
    pub fn new(balance: i64) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    pub fn with_history<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.history.extend(dates.into_iter().map(Into::into));
        self
    }

    /// Sick-leave policy text, or [`PLACEHOLDER`] if none is set.
    pub fn sick_leave_policy_or_default(&self) -> &str {
        self.sick_leave_policy.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// Department and manager of an employee, as returned by
/// `check_employee_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub department: Option<String>,
    pub manager: Option<String>,
}

impl EmployeeProfile {
    pub fn department_or_default(&self) -> &str {
        self.department.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn manager_or_default(&self) -> &str {
        self.manager.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// The roster the server starts with when no configuration overrides it.
pub fn default_seed() -> Vec<(String, EmployeeRecord)> {
    vec![
        (
            "Kunal".to_string(),
            EmployeeRecord::new(18).with_history(["2024-12-25", "2025-01-01"]),
        ),
        ("Rohit".to_string(), EmployeeRecord::new(20)),
    ]
}
