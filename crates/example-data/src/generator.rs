//! Deterministic dataset generation from seed definitions.
//!
//! This module provides the core generation function that produces
//! reproducible patients, users and audit logs from a seed registry. The same
//! seed value and reference date always produce identical output.

use std::iter;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::contact::{email_for, phone_number, street_address};
use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{
    ExampleDataset, ExampleLogSeed, ExamplePatientSeed, ExampleUserSeed, GenderSeed,
    LogStatusSeed, PatientStatusSeed, UserRoleSeed, UserStatusSeed,
};

/// Maximum number of attempts to generate a usable person name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// First log identifier number (`LOG-1000`).
const LOG_ID_BASE: usize = 1000;

/// First patient identifier number (`PAT-10000`).
const PATIENT_ID_BASE: usize = 10_000;

/// First user identifier number (`USR-100`).
const USER_ID_BASE: usize = 100;

/// Actor name used for automated log entries.
pub const SYSTEM_USER: &str = "System";

/// Every action an audit log entry can record.
pub const LOG_ACTIONS: [&str; 10] = [
    "User Login",
    "User Logout",
    "Create Practice",
    "Update Practice",
    "Delete Practice",
    "View Patient",
    "Update Patient",
    "Create Treatment",
    "Complete Treatment",
    "System Backup",
];

/// Log entries and visits fall within this many days before the anchor.
const HISTORY_WINDOW_DAYS: i64 = 30;

/// Sign-ins fall within this many days before the anchor.
const LOGIN_WINDOW_DAYS: i64 = 14;

/// Upcoming appointments fall this many days after the anchor.
const APPOINTMENT_MIN_DAYS: i64 = 1;
const APPOINTMENT_MAX_DAYS: i64 = 14;

/// Accounts were created between these many days before the anchor.
const ACCOUNT_MIN_AGE_DAYS: i64 = 30;
const ACCOUNT_MAX_AGE_DAYS: i64 = 730;

/// Probability (7 in 10) that a patient has an upcoming appointment.
const APPOINTMENT_NUMERATOR: u32 = 7;
const APPOINTMENT_DENOMINATOR: u32 = 10;

/// Probability (3 in 4) that a user account is active.
const ACTIVE_USER_NUMERATOR: u32 = 3;
const ACTIVE_USER_DENOMINATOR: u32 = 4;

const SECONDS_PER_DAY: i64 = 86_400;

/// Generates an example dataset from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG and anchors
/// every generated date to the registry's reference date. Generation order is
/// patients, then users, then logs, so log entries can name generated users.
///
/// - Patients are `PAT-10000` onwards, aged 18 to 67, attached to a registry
///   practice, weighted two active to one pending to one inactive, with a last
///   visit in the 30 days before the anchor and a 70% chance of an
///   appointment 1 to 14 days after it.
/// - Users are `USR-100` onwards with a random role and practice.
/// - Logs are `LOG-1000` onwards, acted by a generated user or `System`.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The registry has no practices
/// - Name generation fails after maximum retries
/// - A generated date is not representable
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_dataset};
///
/// let json = r#"{
///     "version": 1,
///     "referenceDate": "2026-10-19",
///     "practices": [{
///         "id": "1", "name": "Cape Fertility Clinic",
///         "address": "123 Main Street, Cape Town", "phone": "+27 794 3956",
///         "email": "info@capefertility.co.za", "status": "active",
///         "dateCreated": "2023-01-15"
///     }],
///     "seeds": [{"name": "test", "seed": 42, "patientCount": 4, "userCount": 2, "logCount": 6}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let dataset = generate_example_dataset(&registry, seed_def).expect("generated");
///
/// assert_eq!(dataset.patients.len(), 4);
/// assert_eq!(dataset.logs.len(), 6);
/// // Same seed produces identical data
/// let again = generate_example_dataset(&registry, seed_def).expect("generated");
/// assert_eq!(dataset, again);
/// ```
pub fn generate_example_dataset(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<ExampleDataset, GenerationError> {
    let practice_names: Vec<&str> = registry
        .practices()
        .iter()
        .map(|practice| practice.name.as_str())
        .collect();
    if practice_names.is_empty() {
        return Err(GenerationError::NoPractices);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let anchor = registry.reference_date();

    let patients = (0..seed_def.patient_count())
        .map(|index| generate_patient(&mut rng, index, anchor, &practice_names))
        .collect::<Result<Vec<_>, _>>()?;

    let users = (0..seed_def.user_count())
        .map(|index| generate_user(&mut rng, index, anchor, &practice_names))
        .collect::<Result<Vec<_>, _>>()?;

    let actors: Vec<&str> = users
        .iter()
        .map(|user| user.name.as_str())
        .chain(iter::once(SYSTEM_USER))
        .collect();
    let logs = (0..seed_def.log_count())
        .map(|index| generate_log(&mut rng, index, anchor, &actors))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExampleDataset {
        practices: registry.practices().to_vec(),
        patients,
        users,
        logs,
    })
}

fn generate_patient(
    rng: &mut ChaCha8Rng,
    index: usize,
    anchor: NaiveDate,
    practice_names: &[&str],
) -> Result<ExamplePatientSeed, GenerationError> {
    let (first, last) = generate_name(rng)?;
    let age = rng.random_range(18..=67);
    let gender = if rng.random_ratio(1, 2) {
        GenderSeed::Female
    } else {
        GenderSeed::Male
    };
    let phone = phone_number(rng);
    let address = street_address(rng);
    let practice = pick_practice(rng, practice_names)?;

    // Two active entries in four mirror the roster's weighting.
    let status = match rng.random_range(0..4_u8) {
        0 | 1 => PatientStatusSeed::Active,
        2 => PatientStatusSeed::Pending,
        _ => PatientStatusSeed::Inactive,
    };

    let last_visit = shift_days(anchor, -rng.random_range(0..HISTORY_WINDOW_DAYS))?;
    let upcoming_appointment = if rng.random_ratio(APPOINTMENT_NUMERATOR, APPOINTMENT_DENOMINATOR)
    {
        let ahead = rng.random_range(APPOINTMENT_MIN_DAYS..=APPOINTMENT_MAX_DAYS);
        Some(shift_days(anchor, ahead)?)
    } else {
        None
    };
    let treatments = rng.random_range(0..10);

    Ok(ExamplePatientSeed {
        id: format!("PAT-{}", PATIENT_ID_BASE + index),
        email: email_for(&first, &last),
        name: format!("{first} {last}"),
        age,
        gender,
        phone,
        address,
        practice,
        status,
        last_visit,
        upcoming_appointment,
        treatments,
    })
}

fn generate_user(
    rng: &mut ChaCha8Rng,
    index: usize,
    anchor: NaiveDate,
    practice_names: &[&str],
) -> Result<ExampleUserSeed, GenerationError> {
    let (first, last) = generate_name(rng)?;
    let phone = phone_number(rng);
    let role = match rng.random_range(0..4_u8) {
        0 => UserRoleSeed::Admin,
        1 => UserRoleSeed::Doctor,
        2 => UserRoleSeed::Receptionist,
        _ => UserRoleSeed::Nurse,
    };
    let practice = pick_practice(rng, practice_names)?;
    let status = if rng.random_ratio(ACTIVE_USER_NUMERATOR, ACTIVE_USER_DENOMINATOR) {
        UserStatusSeed::Active
    } else {
        UserStatusSeed::Inactive
    };
    let last_login = instant_before(rng, anchor, LOGIN_WINDOW_DAYS)?;
    let account_age = rng.random_range(ACCOUNT_MIN_AGE_DAYS..=ACCOUNT_MAX_AGE_DAYS);
    let date_created = shift_days(anchor, -account_age)?;

    Ok(ExampleUserSeed {
        id: format!("USR-{}", USER_ID_BASE + index),
        email: email_for(&first, &last),
        name: format!("{first} {last}"),
        phone,
        role,
        practice,
        status,
        last_login,
        date_created,
    })
}

fn generate_log(
    rng: &mut ChaCha8Rng,
    index: usize,
    anchor: NaiveDate,
    actors: &[&str],
) -> Result<ExampleLogSeed, GenerationError> {
    let user = actors.choose(rng).copied().unwrap_or(SYSTEM_USER);
    let action = LOG_ACTIONS.choose(rng).copied().unwrap_or("System Backup");
    let timestamp = instant_before(rng, anchor, HISTORY_WINDOW_DAYS)?;
    let status = match rng.random_range(0..3_u8) {
        0 => LogStatusSeed::Success,
        1 => LogStatusSeed::Error,
        _ => LogStatusSeed::Warning,
    };

    Ok(ExampleLogSeed {
        id: format!("LOG-{}", LOG_ID_BASE + index),
        user: user.to_owned(),
        action: action.to_owned(),
        timestamp,
        status,
        details: format!("Details for {} operation", action.to_lowercase()),
    })
}

/// Generates a first and last name that both survive email normalisation.
///
/// Retries up to `MAX_NAME_ATTEMPTS` times if either part has no ASCII
/// alphanumeric characters.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<(String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        if has_ascii_alphanumeric(&first) && has_ascii_alphanumeric(&last) {
            return Ok((first, last));
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn has_ascii_alphanumeric(part: &str) -> bool {
    part.chars().any(|c| c.is_ascii_alphanumeric())
}

fn pick_practice(rng: &mut ChaCha8Rng, practice_names: &[&str]) -> Result<String, GenerationError> {
    practice_names
        .choose(rng)
        .map(|name| (*name).to_owned())
        .ok_or(GenerationError::NoPractices)
}

fn shift_days(anchor: NaiveDate, offset_days: i64) -> Result<NaiveDate, GenerationError> {
    TimeDelta::try_days(offset_days)
        .and_then(|delta| anchor.checked_add_signed(delta))
        .ok_or_else(|| GenerationError::DateOutOfRange {
            anchor: anchor.to_string(),
            offset_days,
        })
}

/// Draws an instant within `window_days` days before midnight of `anchor`.
fn instant_before(
    rng: &mut ChaCha8Rng,
    anchor: NaiveDate,
    window_days: i64,
) -> Result<DateTime<Utc>, GenerationError> {
    let day = shift_days(anchor, -rng.random_range(1..=window_days))?;
    let offset = TimeDelta::try_seconds(rng.random_range(0..SECONDS_PER_DAY)).unwrap_or_default();
    Ok(day.and_time(NaiveTime::MIN).and_utc() + offset)
}
