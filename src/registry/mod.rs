//! Employee leave registry.
//!
//! One table, keyed by employee name (case-sensitive), owned by an
//! [`EmployeeRegistry`] and shared by handle. Every operation takes the
//! table lock for its whole duration, so a balance check and the matching
//! decrement can never interleave with another caller's.

mod error;
mod record;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

pub use error::LeaveError;
pub use record::{default_seed, EmployeeProfile, EmployeeRecord, PLACEHOLDER};

/// Outcome of a successful `apply_leave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveApplied {
    pub days: i64,
    pub remaining: i64,
}

/// Outcome of a successful sick-leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SickLeaveApplied {
    pub days: i64,
    pub remaining: i64,
    pub policy: String,
}

#[derive(Debug, Default)]
struct Roster {
    /// Names in insertion order; `records` has no ordering of its own.
    order: Vec<String>,
    records: HashMap<String, EmployeeRecord>,
}

/// The in-memory employee table.
#[derive(Debug, Default)]
pub struct EmployeeRegistry {
    roster: Mutex<Roster>,
}

impl EmployeeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in two-employee roster.
    pub fn with_default_seed() -> Self {
        let mut registry = Self::new();
        for (name, record) in default_seed() {
            registry.register(name, record);
        }
        registry
    }

    /// Add an employee. Returns `false` (and changes nothing) if the name
    /// is already taken.
    ///
    /// Only available while the registry is exclusively owned, i.e. before
    /// it is shared with the server.
    pub fn register(&mut self, name: impl Into<String>, record: EmployeeRecord) -> bool {
        let name = name.into();
        let roster = self.roster.get_mut().unwrap_or_else(|e| e.into_inner());
        if roster.records.contains_key(&name) {
            return false;
        }
        roster.order.push(name.clone());
        roster.records.insert(name, record);
        true
    }

    fn lock(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of one employee's record.
    pub fn get(&self, name: &str) -> Option<EmployeeRecord> {
        self.lock().records.get(name).cloned()
    }

    pub fn leave_balance(&self, name: &str) -> Result<i64, LeaveError> {
        self.lock()
            .records
            .get(name)
            .map(|r| r.balance)
            .ok_or(LeaveError::EmployeeNotFound)
    }

    /// Book one leave day per entry in `dates`.
    ///
    /// All-or-nothing: if the balance cannot cover every date, nothing is
    /// deducted and nothing is appended.
    pub fn apply_leave(&self, name: &str, dates: &[String]) -> Result<LeaveApplied, LeaveError> {
        let mut roster = self.lock();
        let record = roster
            .records
            .get_mut(name)
            .ok_or(LeaveError::EmployeeNotFound)?;

        let requested = dates.len() as i64;
        if requested > record.balance {
            warn!(
                employee = name,
                requested,
                available = record.balance,
                "Leave request rejected"
            );
            return Err(LeaveError::InsufficientBalance {
                requested,
                available: record.balance,
            });
        }

        record.balance -= requested;
        record.history.extend_from_slice(dates);
        info!(
            employee = name,
            days = requested,
            remaining = record.balance,
            "Leave applied"
        );

        Ok(LeaveApplied {
            days: requested,
            remaining: record.balance,
        })
    }

    pub fn leave_history(&self, name: &str) -> Result<Vec<String>, LeaveError> {
        self.lock()
            .records
            .get(name)
            .map(|r| r.history.clone())
            .ok_or(LeaveError::EmployeeNotFound)
    }

    /// Every employee name, in the order they were registered.
    pub fn employee_names(&self) -> Vec<String> {
        self.lock().order.clone()
    }

    pub fn employee_profile(&self, name: &str) -> Result<EmployeeProfile, LeaveError> {
        self.lock()
            .records
            .get(name)
            .map(|r| EmployeeProfile {
                department: r.department.clone(),
                manager: r.manager.clone(),
            })
            .ok_or(LeaveError::EmployeeNotFound)
    }

    /// Deduct `num_days` of sick leave from the balance.
    ///
    /// Unlike [`apply_leave`](Self::apply_leave) this records no dates, and
    /// `num_days` is not checked for sign: a negative count credits the
    /// balance.
    pub fn process_sick_leave(
        &self,
        name: &str,
        num_days: i64,
    ) -> Result<SickLeaveApplied, LeaveError> {
        let mut roster = self.lock();
        let record = roster
            .records
            .get_mut(name)
            .ok_or(LeaveError::EmployeeNotFound)?;
        let policy = record.sick_leave_policy_or_default().to_string();

        if num_days > record.balance {
            warn!(
                employee = name,
                requested = num_days,
                available = record.balance,
                "Sick leave request rejected"
            );
            return Err(LeaveError::InsufficientSickBalance {
                requested: num_days,
                available: record.balance,
                policy,
            });
        }

        if num_days < 0 {
            warn!(employee = name, num_days, "Negative sick leave credits the balance");
        }
        record.balance = record.balance.saturating_sub(num_days);
        info!(
            employee = name,
            days = num_days,
            remaining = record.balance,
            "Sick leave applied"
        );

        Ok(SickLeaveApplied {
            days: num_days,
            remaining: record.balance,
            policy,
        })
    }
}
