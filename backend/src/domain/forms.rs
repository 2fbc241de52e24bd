//! Form validation for the profile, practice and user editors.
//!
//! Each form deserialises leniently (missing fields become empty strings) and
//! `validate` reports every failing field at once, in form order.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::Error;
use super::ports::{NewPractice, NewUser};
use super::profile::Profile;
use super::records::{PracticeStatus, UserRole, UserStatus};

/// Why a form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// The field is blank.
    Required,
    /// The field is not an email address.
    InvalidEmail,
    /// The field names no known role.
    UnknownRole,
    /// The field names no known status.
    UnknownStatus,
}

impl FieldErrorCode {
    /// Wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "invalid_email",
            Self::UnknownRole => "unknown_role",
            Self::UnknownStatus => "unknown_status",
        }
    }
}

/// One rejected form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormValidationError {
    /// camelCase field name as submitted.
    pub field: &'static str,
    /// Reason for rejection.
    pub code: FieldErrorCode,
}

impl FormValidationError {
    const fn new(field: &'static str, code: FieldErrorCode) -> Self {
        Self { field, code }
    }
}

impl From<Vec<FormValidationError>> for Error {
    fn from(errors: Vec<FormValidationError>) -> Self {
        let fields: Vec<_> = errors
            .iter()
            .map(|error| json!({ "field": error.field, "code": error.code.as_str() }))
            .collect();
        Self::invalid_request("form validation failed").with_details(json!({
            "code": "form_invalid",
            "fields": fields,
        }))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Returns `true` when `value` looks like an email address.
///
/// # Examples
/// ```
/// use practice_admin::domain::is_valid_email;
///
/// assert!(is_valid_email("info@capefertility.co.za"));
/// assert!(!is_valid_email("info@capefertility"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Collects field failures while a form is checked.
#[derive(Default)]
struct Checker {
    errors: Vec<FormValidationError>,
}

impl Checker {
    fn required(&mut self, field: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors
                .push(FormValidationError::new(field, FieldErrorCode::Required));
        }
        trimmed.to_owned()
    }

    fn email(&mut self, field: &'static str, value: &str) -> String {
        let trimmed = self.required(field, value);
        if !trimmed.is_empty() && !is_valid_email(&trimmed) {
            self.errors
                .push(FormValidationError::new(field, FieldErrorCode::InvalidEmail));
        }
        trimmed
    }

    fn parsed<T: std::str::FromStr>(
        &mut self,
        field: &'static str,
        value: &str,
        code: FieldErrorCode,
    ) -> Option<T> {
        if self.required(field, value).is_empty() {
            return None;
        }
        let parsed = value.parse().ok();
        if parsed.is_none() {
            self.errors.push(FormValidationError::new(field, code));
        }
        parsed
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, Vec<FormValidationError>> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}

/// Profile editor input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Telephone number.
    pub phone: String,
}

impl ProfileForm {
    /// Check every field and build the profile.
    ///
    /// # Errors
    ///
    /// Returns each blank field and a malformed email.
    pub fn validate(self) -> Result<Profile, Vec<FormValidationError>> {
        let mut checker = Checker::default();
        let profile = Profile {
            first_name: checker.required("firstName", &self.first_name),
            last_name: checker.required("lastName", &self.last_name),
            email: checker.email("email", &self.email),
            phone: checker.required("phone", &self.phone),
        };
        checker.finish(Some(profile))
    }
}

/// Practice editor input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticeForm {
    /// Practice name.
    pub name: String,
    /// Telephone number.
    pub telephone: String,
    /// Contact email address.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Operating status; blank means active.
    pub status: String,
}

impl PracticeForm {
    /// Check every field and build the new practice.
    ///
    /// # Errors
    ///
    /// Returns each blank field, a malformed email and an unknown status.
    pub fn validate(self) -> Result<NewPractice, Vec<FormValidationError>> {
        let mut checker = Checker::default();
        let name = checker.required("name", &self.name);
        let phone = checker.required("telephone", &self.telephone);
        let email = checker.email("email", &self.email);
        let address = checker.required("address", &self.address);
        let status = if self.status.trim().is_empty() {
            Some(PracticeStatus::Active)
        } else {
            checker.parsed("status", &self.status, FieldErrorCode::UnknownStatus)
        };
        let practice = status.map(|status| NewPractice {
            name,
            address,
            phone,
            email,
            status,
        });
        checker.finish(practice)
    }
}

/// User editor input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Telephone number; optional.
    pub phone: String,
    /// Staff role.
    pub role: String,
    /// Account status.
    pub status: String,
    /// Practice name; blank means the selected practice.
    pub practice: String,
}

impl UserForm {
    /// Check every field and build the new user.
    ///
    /// # Errors
    ///
    /// Returns each blank required field, a malformed email, an unknown role
    /// and an unknown status.
    pub fn validate(self) -> Result<NewUser, Vec<FormValidationError>> {
        let mut checker = Checker::default();
        let first_name = checker.required("firstName", &self.first_name);
        let last_name = checker.required("lastName", &self.last_name);
        let email = checker.email("email", &self.email);
        let role: Option<UserRole> =
            checker.parsed("role", &self.role, FieldErrorCode::UnknownRole);
        let status: Option<UserStatus> =
            checker.parsed("status", &self.status, FieldErrorCode::UnknownStatus);
        let user = role.zip(status).map(|(role, status)| NewUser {
            name: format!("{first_name} {last_name}"),
            email,
            phone: self.phone.trim().to_owned(),
            role,
            practice: self.practice.trim().to_owned(),
            status,
        });
        checker.finish(user)
    }
}
