use thiserror::Error;

/// Ways a leave query or mutation can be refused.
///
/// The `Display` text is exactly what a caller of the MCP tools reads, so
/// changing a message here changes the external contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeaveError {
    #[error("Employee not found.")]
    EmployeeNotFound,

    #[error("Insufficient leave balance. You requested {requested} day(s) but have only {available}.")]
    InsufficientBalance { requested: i64, available: i64 },

    #[error("Insufficient leave balance. You requested {requested} day(s) but have only {available}. Sick leave policy: {policy}")]
    InsufficientSickBalance {
        requested: i64,
        available: i64,
        policy: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(LeaveError::EmployeeNotFound.to_string(), "Employee not found.");
        assert_eq!(
            LeaveError::InsufficientBalance {
                requested: 21,
                available: 20
            }
            .to_string(),
            "Insufficient leave balance. You requested 21 day(s) but have only 20."
        );
        assert_eq!(
            LeaveError::InsufficientSickBalance {
                requested: 4,
                available: 1,
                policy: "N/A".into()
            }
            .to_string(),
            "Insufficient leave balance. You requested 4 day(s) but have only 1. Sick leave policy: N/A"
        );
    }
}
