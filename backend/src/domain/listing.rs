//! Query schemas for each record type and the listing use-case.
//!
//! One schema per record type replaces the per-view search, filter and
//! pagination code. Every view runs through the same `list_query` engine.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use list_query::{Page, QuerySchema, QueryState};
use mockable::Clock;
use tracing::debug;

use super::error::Error;
use super::ports::RecordStore;
use super::records::{LogRecord, PatientRecord, Practice, UserRecord};

/// Owned page of records returned to adapters.
pub type ListPage<T> = Page<T>;

/// Label of patient segment 1.
pub const UPCOMING_APPOINTMENTS: &str = "Upcoming Appointments";

/// Label of patient segment 2.
pub const RECENT_VISITS: &str = "Recent Visits";

/// Patients seen within this many days count as recent visits.
pub const RECENT_VISIT_DAYS: i64 = 7;

/// Log schema: search id, user, action and details; filter status and action.
#[must_use]
pub fn log_schema() -> QuerySchema<LogRecord> {
    QuerySchema::new()
        .search_field("id", |log: &LogRecord| log.id.as_str())
        .search_field("user", |log: &LogRecord| log.user.as_str())
        .search_field("action", |log: &LogRecord| log.action.as_str())
        .search_field("details", |log: &LogRecord| log.details.as_str())
        .filter("status", |log: &LogRecord| log.status.as_str())
        .filter("action", |log: &LogRecord| log.action.as_str())
}

/// Patient schema: search id, name and email; filter status and practice;
/// segment 1 holds patients with a booked appointment and segment 2 those
/// whose last visit falls strictly after `now` minus seven days.
#[must_use]
pub fn patient_schema(now: DateTime<Utc>) -> QuerySchema<PatientRecord> {
    let cutoff = now
        .checked_sub_signed(TimeDelta::days(RECENT_VISIT_DAYS))
        .unwrap_or(now)
        .date_naive();
    QuerySchema::new()
        .search_field("id", |patient: &PatientRecord| patient.id.as_str())
        .search_field("name", |patient: &PatientRecord| patient.name.as_str())
        .search_field("email", |patient: &PatientRecord| patient.email.as_str())
        .filter("status", |patient: &PatientRecord| patient.status.as_str())
        .filter("practice", |patient: &PatientRecord| patient.practice.as_str())
        .segment(UPCOMING_APPOINTMENTS, |patient: &PatientRecord| {
            patient.upcoming_appointment.is_some()
        })
        .segment(RECENT_VISITS, move |patient: &PatientRecord| {
            patient.last_visit > cutoff
        })
}

/// User schema: search id, name, email and role; filter role, status and
/// practice.
#[must_use]
pub fn user_schema() -> QuerySchema<UserRecord> {
    QuerySchema::new()
        .search_field("id", |user: &UserRecord| user.id.as_str())
        .search_field("name", |user: &UserRecord| user.name.as_str())
        .search_field("email", |user: &UserRecord| user.email.as_str())
        .search_field("role", |user: &UserRecord| user.role.as_str())
        .filter("role", |user: &UserRecord| user.role.as_str())
        .filter("status", |user: &UserRecord| user.status.as_str())
        .filter("practice", |user: &UserRecord| user.practice.as_str())
}

/// Practice schema: search id, name, email and address; filter status.
#[must_use]
pub fn practice_schema() -> QuerySchema<Practice> {
    QuerySchema::new()
        .search_field("id", |practice: &Practice| practice.id.as_str())
        .search_field("name", |practice: &Practice| practice.name.as_str())
        .search_field("email", |practice: &Practice| practice.email.as_str())
        .search_field("address", |practice: &Practice| practice.address.as_str())
        .filter("status", |practice: &Practice| practice.status.as_str())
}

/// Listing use-case combining the record store, the schemas and the clock.
///
/// Unknown filter names and out-of-range segments are rejected here so
/// clients learn about typos; the engine itself ignores them.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use list_query::QueryState;
/// use mockable::DefaultClock;
/// use practice_admin::domain::ListingService;
/// use practice_admin::outbound::memory::InMemoryRecordStore;
///
/// let service = ListingService::new(Arc::new(InMemoryRecordStore::default()), Arc::new(DefaultClock));
/// let page = service.list_logs(&QueryState::new()).expect("valid query");
/// assert_eq!(page.total, 0);
/// ```
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
}

impl ListingService {
    /// Build the service over a store and a clock.
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Query the audit log.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` when the query names an
    /// unknown filter or segment.
    pub fn list_logs(&self, state: &QueryState) -> Result<ListPage<LogRecord>, Error> {
        run("logs", &log_schema(), &self.store.logs(), state)
    }

    /// Query the patient roster. Segment rules use the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` when the query names an
    /// unknown filter or segment.
    pub fn list_patients(&self, state: &QueryState) -> Result<ListPage<PatientRecord>, Error> {
        let schema = patient_schema(self.clock.utc());
        run("patients", &schema, &self.store.patients(), state)
    }

    /// Query the staff roster.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` when the query names an
    /// unknown filter or segment.
    pub fn list_users(&self, state: &QueryState) -> Result<ListPage<UserRecord>, Error> {
        run("users", &user_schema(), &self.store.users(), state)
    }

    /// Query the practice roster.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` when the query names an
    /// unknown filter or segment.
    pub fn list_practices(&self, state: &QueryState) -> Result<ListPage<Practice>, Error> {
        run("practices", &practice_schema(), &self.store.practices(), state)
    }

    /// Patient segment labels in tab order. Index `n` is the `segment=n`
    /// query value; index 0 is the unsegmented "All" tab.
    #[must_use]
    pub fn patient_segments(&self) -> Vec<&'static str> {
        patient_schema(self.clock.utc()).segment_labels()
    }

    /// Distinct log actions in first-seen order, for the action filter.
    #[must_use]
    pub fn log_actions(&self) -> Vec<String> {
        log_schema().filter_options(&self.store.logs(), "action")
    }
}

fn run<R: Clone>(
    listing: &'static str,
    schema: &QuerySchema<R>,
    records: &[R],
    state: &QueryState,
) -> Result<ListPage<R>, Error> {
    schema.check(state)?;
    let page = schema.run(records, state).into_owned();
    debug!(
        listing,
        total = page.total,
        returned = page.items.len(),
        "listing evaluated"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use rstest::rstest;

    use super::*;
    use crate::domain::records::{Gender, PatientStatus};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 30, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn patient(id: &str, last_visit: NaiveDate, upcoming: Option<NaiveDate>) -> PatientRecord {
        PatientRecord {
            id: id.to_owned(),
            name: "Michael Brown".to_owned(),
            age: 40,
            gender: Gender::Male,
            phone: "+27 555 0101".to_owned(),
            email: "michael.brown@example.com".to_owned(),
            address: "3 Pine St, Cape Town".to_owned(),
            practice: "Cape Fertility Clinic".to_owned(),
            status: PatientStatus::Active,
            last_visit,
            upcoming_appointment: upcoming,
            treatments_count: 1,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).expect("valid date")
    }

    #[rstest]
    #[case(day(13), true)]
    #[case(day(12), false)]
    #[case(day(19), true)]
    fn recent_visits_are_strictly_inside_seven_days(#[case] visit: NaiveDate, #[case] expected: bool) {
        let schema = patient_schema(now());
        let state = QueryState::new().with_segment(2);
        assert_eq!(schema.matches(&patient("PAT-1", visit, None), &state), expected);
    }

    #[test]
    fn upcoming_segment_requires_an_appointment() {
        let schema = patient_schema(now());
        let state = QueryState::new().with_segment(1);
        assert!(schema.matches(&patient("PAT-1", day(1), Some(day(25))), &state));
        assert!(!schema.matches(&patient("PAT-2", day(1), None), &state));
    }

    #[test]
    fn patient_segments_are_labelled_in_tab_order() {
        assert_eq!(
            patient_schema(now()).segment_labels(),
            vec!["All", UPCOMING_APPOINTMENTS, RECENT_VISITS]
        );
    }

    #[test]
    fn user_search_covers_role() {
        let names: Vec<&str> = user_schema().search_field_names().collect();
        assert_eq!(names, vec!["id", "name", "email", "role"]);
    }

    #[test]
    fn log_filters_are_status_and_action() {
        let names: Vec<&str> = log_schema().filter_names().collect();
        assert_eq!(names, vec!["status", "action"]);
    }
}
