//! Record types listed by the console.
//!
//! Every record serialises to camelCase JSON with lowercase enum values.
//! Enumerations expose `as_str` so query schemas can filter on them with plain
//! string accessors.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use example_data::{
    ExampleLogSeed, ExamplePatientSeed, ExamplePracticeSeed, ExampleUserSeed, GenderSeed,
    LogStatusSeed, PatientStatusSeed, PracticeStatusSeed, UserRoleSeed, UserStatusSeed,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when text does not name a known enumeration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Enumeration being parsed, for example `role`.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

macro_rules! record_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) from $seed:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Lowercase wire form.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            /// Parses the wire form, ignoring ASCII case so form input such as
            /// `Doctor` is accepted.
            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value.trim()))
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: value.to_owned(),
                    })
            }
        }

        impl From<$seed> for $name {
            fn from(value: $seed) -> Self {
                match value {
                    $( $seed::$variant => Self::$variant, )+
                }
            }
        }
    };
}

record_enum! {
    /// Outcome of an audited operation.
    LogStatus ("log status") from LogStatusSeed {
        /// The operation completed.
        Success => "success",
        /// The operation failed.
        Error => "error",
        /// The operation completed with a warning.
        Warning => "warning",
    }
}

record_enum! {
    /// Lifecycle status of a patient.
    PatientStatus ("patient status") from PatientStatusSeed {
        /// Registered and in treatment.
        Active => "active",
        /// Awaiting registration.
        Pending => "pending",
        /// Treatment finished or paused.
        Inactive => "inactive",
    }
}

record_enum! {
    /// Patient gender.
    Gender ("gender") from GenderSeed {
        /// Male.
        Male => "male",
        /// Female.
        Female => "female",
    }
}

record_enum! {
    /// Role of a practice staff member.
    UserRole ("role") from UserRoleSeed {
        /// Practice administrator.
        Admin => "admin",
        /// Doctor.
        Doctor => "doctor",
        /// Front desk receptionist.
        Receptionist => "receptionist",
        /// Nurse.
        Nurse => "nurse",
    }
}

record_enum! {
    /// Account status of a practice staff member.
    UserStatus ("status") from UserStatusSeed {
        /// The account may sign in.
        Active => "active",
        /// The account is disabled.
        Inactive => "inactive",
    }
}

record_enum! {
    /// Operating status of a practice.
    PracticeStatus ("practice status") from PracticeStatusSeed {
        /// The practice is operating.
        Active => "active",
        /// The practice is closed or suspended.
        Inactive => "inactive",
    }
}

/// One audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Identifier such as `LOG-1000`.
    pub id: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// Acting user's display name, or `System`.
    pub user: String,
    /// Action label.
    pub action: String,
    /// Outcome.
    pub status: LogStatus,
    /// Free-text description.
    pub details: String,
}

impl From<ExampleLogSeed> for LogRecord {
    fn from(seed: ExampleLogSeed) -> Self {
        Self {
            id: seed.id,
            timestamp: seed.timestamp,
            user: seed.user,
            action: seed.action,
            status: seed.status.into(),
            details: seed.details,
        }
    }
}

/// One patient on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Identifier such as `PAT-10000`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// Gender.
    pub gender: Gender,
    /// Telephone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Name of the practice the patient attends.
    pub practice: String,
    /// Lifecycle status.
    pub status: PatientStatus,
    /// Most recent visit.
    pub last_visit: NaiveDate,
    /// Next booked appointment, if any.
    pub upcoming_appointment: Option<NaiveDate>,
    /// Number of treatments received.
    pub treatments_count: u32,
}

impl From<ExamplePatientSeed> for PatientRecord {
    fn from(seed: ExamplePatientSeed) -> Self {
        Self {
            id: seed.id,
            name: seed.name,
            age: seed.age,
            gender: seed.gender.into(),
            phone: seed.phone,
            email: seed.email,
            address: seed.address,
            practice: seed.practice,
            status: seed.status.into(),
            last_visit: seed.last_visit,
            upcoming_appointment: seed.upcoming_appointment,
            treatments_count: seed.treatments,
        }
    }
}

/// One practice staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Identifier such as `USR-100`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Telephone number.
    pub phone: String,
    /// Staff role.
    pub role: UserRole,
    /// Name of the practice the user works at.
    pub practice: String,
    /// Account status.
    pub status: UserStatus,
    /// Most recent sign-in; absent for accounts that never signed in.
    pub last_login: Option<DateTime<Utc>>,
    /// Date the account was created.
    pub date_created: NaiveDate,
}

impl From<ExampleUserSeed> for UserRecord {
    fn from(seed: ExampleUserSeed) -> Self {
        Self {
            id: seed.id,
            name: seed.name,
            email: seed.email,
            phone: seed.phone,
            role: seed.role.into(),
            practice: seed.practice,
            status: seed.status.into(),
            last_login: Some(seed.last_login),
            date_created: seed.date_created,
        }
    }
}

/// A medical practice managed by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practice {
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
    pub status: PracticeStatus,
    /// Clinical specialties offered.
    pub specialties: Vec<String>,
    /// Number of registered patients.
    pub patients_count: u32,
    /// Number of doctors on staff.
    pub doctors_count: u32,
    /// Date the practice was added.
    pub date_created: NaiveDate,
}

impl From<ExamplePracticeSeed> for Practice {
    fn from(seed: ExamplePracticeSeed) -> Self {
        Self {
            id: seed.id,
            name: seed.name,
            address: seed.address,
            phone: seed.phone,
            email: seed.email,
            status: seed.status.into(),
            specialties: seed.specialties,
            patients_count: seed.patients_count,
            doctors_count: seed.doctors_count,
            date_created: seed.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("doctor", Ok(UserRole::Doctor))]
    #[case("Doctor", Ok(UserRole::Doctor))]
    #[case(" NURSE ", Ok(UserRole::Nurse))]
    #[case("surgeon", Err(UnknownVariant { kind: "role", value: "surgeon".to_owned() }))]
    fn roles_parse_ignoring_case(#[case] raw: &str, #[case] expected: Result<UserRole, UnknownVariant>) {
        assert_eq!(raw.parse::<UserRole>(), expected);
    }

    #[test]
    fn unknown_variant_names_the_kind() {
        let err = "archived".parse::<UserStatus>().expect_err("unknown status");
        assert_eq!(err.to_string(), "unknown status 'archived'");
    }

    #[test]
    fn enums_match_their_serde_form() {
        for status in LogStatus::ALL {
            let json = serde_json::to_value(status).expect("serialise");
            assert_eq!(json.as_str(), Some(status.as_str()));
        }
    }

    #[test]
    fn patient_serialises_to_camel_case() {
        let patient = PatientRecord {
            id: "PAT-10000".to_owned(),
            name: "Emma Johnson".to_owned(),
            age: 34,
            gender: Gender::Female,
            phone: "+27 123 4567".to_owned(),
            email: "emma.johnson@example.com".to_owned(),
            address: "12 Oak St, Cape Town".to_owned(),
            practice: "Cape Fertility Clinic".to_owned(),
            status: PatientStatus::Pending,
            last_visit: NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date"),
            upcoming_appointment: None,
            treatments_count: 2,
        };
        let json = serde_json::to_value(&patient).expect("serialise");
        assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("pending"));
        assert!(json.get("treatmentsCount").is_some());
        assert!(json.get("upcomingAppointment").is_some());
    }
}
