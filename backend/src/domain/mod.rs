//! Domain types and use-cases for the practice admin console.
//!
//! Purpose: hold the records the console lists, the query schemas applied to
//! them, the practice selection rules and the form validation. Nothing here
//! knows about HTTP; adapters depend on the ports in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - ListingService: search, filter, segment and paginate each record type.
//! - SelectionService, Navigator, SelectionRouteGuard: practice selection
//!   scoped to navigation.
//! - DashboardService, RosterService, ProfileService: remaining use-cases.

pub mod dashboard;
pub mod error;
pub mod format;
pub mod forms;
pub mod listing;
pub mod ports;
pub mod profile;
pub mod records;
pub mod roster;
pub mod selection;
pub mod trace_id;

pub use self::dashboard::{
    DashboardService, DashboardSummary, LogBreakdown, ProgressStats, RecentPractice,
};
pub use self::error::{Error, ErrorCode};
pub use self::format::{format_currency, format_date, initials};
pub use self::forms::{
    FieldErrorCode, FormValidationError, PracticeForm, ProfileForm, UserForm, is_valid_email,
};
pub use self::listing::{
    ListPage, ListingService, RECENT_VISITS, UPCOMING_APPOINTMENTS, log_schema, patient_schema,
    practice_schema, user_schema,
};
pub use self::profile::{Profile, ProfileService, ProfileView};
pub use self::records::{
    Gender, LogRecord, LogStatus, PatientRecord, PatientStatus, Practice, PracticeStatus,
    UnknownVariant, UserRecord, UserRole, UserStatus,
};
pub use self::roster::RosterService;
pub use self::selection::{
    DASHBOARD_ROUTE, Navigator, PRACTICE_USERS_ROUTE, SelectedPractice, SelectionRouteGuard,
    SelectionService, is_dashboard, is_practice_scoped, normalise_path,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use practice_admin::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("practice 9 does not exist"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
