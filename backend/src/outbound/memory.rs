//! In-memory adapters for the record, selection and profile ports.
//!
//! Each store guards its data with an `RwLock`. A poisoned lock is recovered
//! rather than propagated: the data is plain values with no invariants a
//! panicking writer could break halfway.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use example_data::ExampleDataset;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    NewPractice, NewUser, ProfileStore, RecordStore, SelectionContext,
};
use crate::domain::{LogRecord, PatientRecord, Practice, Profile, SelectedPractice, UserRecord};

const USER_ID_PREFIX: &str = "USR-";
const FIRST_USER_NUMBER: u64 = 100;
const FIRST_PRACTICE_NUMBER: u64 = 1;

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Next number after the largest numeric id, or `first` when none parse.
fn next_number<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str, first: u64) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|digits| digits.parse::<u64>().ok())
        .max()
        .map_or(first, |max| max.saturating_add(1))
}

#[derive(Default)]
struct Records {
    logs: Vec<LogRecord>,
    patients: Vec<PatientRecord>,
    users: Vec<UserRecord>,
    practices: Vec<Practice>,
}

/// Record store holding every collection in memory.
///
/// # Examples
/// ```
/// use practice_admin::domain::ports::RecordStore;
/// use practice_admin::outbound::memory::InMemoryRecordStore;
///
/// let store = InMemoryRecordStore::default();
/// assert!(store.practices().is_empty());
/// ```
pub struct InMemoryRecordStore {
    records: RwLock<Records>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self {
            records: RwLock::new(Records::default()),
            clock: Arc::new(DefaultClock),
        }
    }
}

impl InMemoryRecordStore {
    /// Load a generated dataset. `clock` dates records created later.
    pub fn from_dataset(dataset: ExampleDataset, clock: Arc<dyn Clock>) -> Self {
        let records = Records {
            logs: dataset.logs.into_iter().map(LogRecord::from).collect(),
            patients: dataset.patients.into_iter().map(PatientRecord::from).collect(),
            users: dataset.users.into_iter().map(UserRecord::from).collect(),
            practices: dataset.practices.into_iter().map(Practice::from).collect(),
        };
        Self {
            records: RwLock::new(records),
            clock,
        }
    }

    /// Replace the clock used to date new records.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl RecordStore for InMemoryRecordStore {
    fn logs(&self) -> Vec<LogRecord> {
        read(&self.records).logs.clone()
    }

    fn patients(&self) -> Vec<PatientRecord> {
        read(&self.records).patients.clone()
    }

    fn users(&self) -> Vec<UserRecord> {
        read(&self.records).users.clone()
    }

    fn practices(&self) -> Vec<Practice> {
        read(&self.records).practices.clone()
    }

    fn find_practice(&self, id: &str) -> Option<Practice> {
        read(&self.records)
            .practices
            .iter()
            .find(|practice| practice.id == id)
            .cloned()
    }

    fn add_user(&self, user: NewUser) -> UserRecord {
        let today = self.clock.utc().date_naive();
        let mut records = write(&self.records);
        let number = next_number(
            records.users.iter().map(|u| u.id.as_str()),
            USER_ID_PREFIX,
            FIRST_USER_NUMBER,
        );
        let record = UserRecord {
            id: format!("{USER_ID_PREFIX}{number}"),
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            practice: user.practice,
            status: user.status,
            last_login: None,
            date_created: today,
        };
        records.users.push(record.clone());
        record
    }

    fn add_practice(&self, practice: NewPractice) -> Practice {
        let today = self.clock.utc().date_naive();
        let mut records = write(&self.records);
        let number = next_number(
            records.practices.iter().map(|p| p.id.as_str()),
            "",
            FIRST_PRACTICE_NUMBER,
        );
        let record = Practice {
            id: number.to_string(),
            name: practice.name,
            address: practice.address,
            phone: practice.phone,
            email: practice.email,
            status: practice.status,
            specialties: Vec::new(),
            patients_count: 0,
            doctors_count: 0,
            date_created: today,
        };
        records.practices.push(record.clone());
        record
    }
}

/// Selection context for a single console session.
#[derive(Debug, Default)]
pub struct InMemorySelectionContext {
    selected: RwLock<Option<SelectedPractice>>,
}

impl SelectionContext for InMemorySelectionContext {
    fn current(&self) -> Option<SelectedPractice> {
        read(&self.selected).clone()
    }

    fn set(&self, practice: SelectedPractice) {
        *write(&self.selected) = Some(practice);
    }

    fn clear(&self) {
        *write(&self.selected) = None;
    }
}

/// Profile store initialised with the default administrator.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Profile>,
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self) -> Profile {
        read(&self.profile).clone()
    }

    fn save(&self, profile: Profile) {
        *write(&self.profile) = profile;
    }
}
