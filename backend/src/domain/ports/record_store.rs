//! Driven port for the records the console lists.
//!
//! Reads return snapshots so callers can query without holding locks.

use crate::domain::records::{LogRecord, PatientRecord, Practice, UserRecord};
use crate::domain::records::{PracticeStatus, UserRole, UserStatus};

/// Validated input for a new staff member. The store assigns the id and
/// creation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Telephone number.
    pub phone: String,
    /// Staff role.
    pub role: UserRole,
    /// Practice name.
    pub practice: String,
    /// Account status.
    pub status: UserStatus,
}

/// Validated input for a new practice. The store assigns the id and
/// creation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPractice {
    /// Practice name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Telephone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Operating status.
    pub status: PracticeStatus,
}

/// Record source for listings, the dashboard and practice selection.
pub trait RecordStore: Send + Sync {
    /// Audit log entries in source order.
    fn logs(&self) -> Vec<LogRecord>;

    /// Patients in source order.
    fn patients(&self) -> Vec<PatientRecord>;

    /// Staff members in source order.
    fn users(&self) -> Vec<UserRecord>;

    /// Practices in source order.
    fn practices(&self) -> Vec<Practice>;

    /// Look up one practice by id.
    fn find_practice(&self, id: &str) -> Option<Practice>;

    /// Append a staff member, returning the stored record.
    fn add_user(&self, user: NewUser) -> UserRecord;

    /// Append a practice, returning the stored record.
    fn add_practice(&self, practice: NewPractice) -> Practice;
}
