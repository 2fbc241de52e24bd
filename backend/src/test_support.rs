//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::config::AdminSettings;
use crate::inbound::http::state::HttpState;
use crate::startup::build_http_state;

/// Seed loaded by [`fixture_http_state`]: 6 practices, 50 patients, 24 users
/// and 50 log entries.
pub const FIXTURE_SEED: &str = "mossy-owl";

/// Clock pinned to 2026-10-19 09:00 UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureClock;

impl FixtureClock {
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("fixture timestamp must be unambiguous"))
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        Self::now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::now()
    }
}

/// The fixture clock's calendar date.
#[must_use]
pub fn fixture_today() -> NaiveDate {
    FixtureClock::now().date_naive()
}

/// Path of the checked-in seed registry.
#[must_use]
pub fn fixture_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Handler state over the [`FIXTURE_SEED`] records with a fresh selection
/// and profile, dated by [`FixtureClock`].
///
/// # Panics
///
/// Panics when the checked-in registry cannot be loaded.
#[must_use]
pub fn fixture_http_state() -> HttpState {
    let settings = AdminSettings {
        bind_addr: None,
        seed_name: Some(FIXTURE_SEED.to_owned()),
        registry_path: Some(fixture_registry_path()),
    };
    build_http_state(&settings, Arc::new(FixtureClock))
        .unwrap_or_else(|error| panic!("fixture state must load: {error}"))
}
