//! Generated record seed types.
//!
//! This module defines the output types from dataset generation. These types
//! mirror the backend's record enums without depending on the backend crate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of an audited operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatusSeed {
    /// The operation completed.
    #[default]
    Success,
    /// The operation failed.
    Error,
    /// The operation completed with a warning.
    Warning,
}

/// Lifecycle status of a patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatusSeed {
    /// Registered and in treatment.
    #[default]
    Active,
    /// Awaiting registration.
    Pending,
    /// Treatment finished or paused.
    Inactive,
}

/// Patient gender as captured at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderSeed {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Role of a practice staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleSeed {
    /// Practice administrator.
    Admin,
    /// Doctor.
    Doctor,
    /// Front desk receptionist.
    Receptionist,
    /// Nurse.
    Nurse,
}

/// Account status of a practice staff member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatusSeed {
    /// The account may sign in.
    #[default]
    Active,
    /// The account is disabled.
    Inactive,
}

/// Operating status of a practice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeStatusSeed {
    /// The practice is operating.
    #[default]
    Active,
    /// The practice is closed or suspended.
    Inactive,
}

/// A practice record copied from the seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePracticeSeed {
    /// Practice identifier.
    pub id: String,
    /// Practice name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Telephone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Operating status.
    pub status: PracticeStatusSeed,
    /// Clinical specialties offered.
    pub specialties: Vec<String>,
    /// Number of registered patients.
    pub patients_count: u32,
    /// Number of doctors on staff.
    pub doctors_count: u32,
    /// Date the practice was added.
    pub date_created: NaiveDate,
}

/// A generated patient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePatientSeed {
    /// Patient identifier, `PAT-<n>`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// Gender.
    pub gender: GenderSeed,
    /// Telephone number in `+27 ddd dddd` form.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Name of the practice the patient attends.
    pub practice: String,
    /// Lifecycle status.
    pub status: PatientStatusSeed,
    /// Date of the most recent visit.
    pub last_visit: NaiveDate,
    /// Next booked appointment, if any.
    pub upcoming_appointment: Option<NaiveDate>,
    /// Number of treatments received.
    pub treatments: u32,
}

/// A generated practice staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// User identifier, `USR-<n>`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Telephone number in `+27 ddd dddd` form.
    pub phone: String,
    /// Staff role.
    pub role: UserRoleSeed,
    /// Name of the practice the user works at.
    pub practice: String,
    /// Account status.
    pub status: UserStatusSeed,
    /// Most recent sign-in.
    pub last_login: DateTime<Utc>,
    /// Date the account was created.
    pub date_created: NaiveDate,
}

/// A generated audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleLogSeed {
    /// Log identifier, `LOG-<n>`.
    pub id: String,
    /// Display name of the acting user, or `System`.
    pub user: String,
    /// Action label from the fixed catalogue.
    pub action: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// Outcome of the action.
    pub status: LogStatusSeed,
    /// Free-text description.
    pub details: String,
}

/// Every record generated for one seed definition.
///
/// Users are generated before logs so log entries can name them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDataset {
    /// Practices copied from the registry.
    pub practices: Vec<ExamplePracticeSeed>,
    /// Generated patients.
    pub patients: Vec<ExamplePatientSeed>,
    /// Generated practice staff.
    pub users: Vec<ExampleUserSeed>,
    /// Generated audit log entries.
    pub logs: Vec<ExampleLogSeed>,
}
