//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds the practice
//! roster, the reference date generated timelines are anchored to, and the
//! named seed definitions. The registry is loaded from JSON and provides
//! deterministic seed lookups.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::{ExamplePracticeSeed, PracticeStatusSeed};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// Calendar date format used throughout the registry.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A seed registry containing the practice roster and named seeds.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "referenceDate": "2026-10-19",
///     "practices": [{
///         "id": "1", "name": "Cape Fertility Clinic",
///         "address": "123 Main Street, Cape Town", "phone": "+27 794 3956",
///         "email": "info@capefertility.co.za", "status": "active",
///         "specialties": ["IVF"], "patientsCount": 245, "doctorsCount": 12,
///         "dateCreated": "2023-01-15"
///     }],
///     "seeds": [{"name": "test", "seed": 42, "patientCount": 5, "userCount": 3, "logCount": 8}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.practices().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    reference_date: NaiveDate,
    practices: Vec<ExamplePracticeSeed>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - A date is not `YYYY-MM-DD`
    /// - The practices array is empty or repeats an id
    /// - The seeds array is empty
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let reference_date = NaiveDate::parse_from_str(&raw.reference_date, DATE_FORMAT)
            .map_err(|_| RegistryError::InvalidReferenceDate {
                value: raw.reference_date.clone(),
            })?;

        if raw.practices.is_empty() {
            return Err(RegistryError::EmptyPractices);
        }

        let mut seen_ids = HashSet::new();
        let practices = raw
            .practices
            .into_iter()
            .enumerate()
            .map(|(index, practice)| {
                if !seen_ids.insert(practice.id.clone()) {
                    return Err(RegistryError::DuplicatePracticeId { id: practice.id });
                }
                practice.into_seed(index)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition {
                name: s.name,
                seed: s.seed,
                patient_count: s.patient_count,
                user_count: s.user_count,
                log_count: s.log_count,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            reference_date,
            practices,
            seeds,
        })
    }

    /// Returns a copy of the registry anchored to another reference date.
    ///
    /// Generated timelines are relative to the reference date, so servers
    /// anchor the registry to the current day to keep "recent" and "upcoming"
    /// records meaningful.
    #[must_use]
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the date generated timelines are anchored to.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Returns the practice roster.
    #[must_use]
    pub fn practices(&self) -> &[ExamplePracticeSeed] {
        &self.practices
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic dataset generation.
///
/// Each seed has a unique name, an RNG seed value, and the number of
/// patients, users and log entries to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    patient_count: usize,
    user_count: usize,
    log_count: usize,
}

impl SeedDefinition {
    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of patients to generate.
    #[must_use]
    pub const fn patient_count(&self) -> usize {
        self.patient_count
    }

    /// Returns the number of users to generate.
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.user_count
    }

    /// Returns the number of log entries to generate.
    #[must_use]
    pub const fn log_count(&self) -> usize {
        self.log_count
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    reference_date: String,
    practices: Vec<RawPractice>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a practice.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPractice {
    id: String,
    name: String,
    address: String,
    phone: String,
    email: String,
    status: PracticeStatusSeed,
    #[serde(default)]
    specialties: Vec<String>,
    #[serde(default)]
    patients_count: u32,
    #[serde(default)]
    doctors_count: u32,
    date_created: String,
}

impl RawPractice {
    fn into_seed(self, index: usize) -> Result<ExamplePracticeSeed, RegistryError> {
        let date_created = NaiveDate::parse_from_str(&self.date_created, DATE_FORMAT).map_err(
            |_| RegistryError::InvalidPracticeDate {
                index,
                value: self.date_created.clone(),
            },
        )?;
        Ok(ExamplePracticeSeed {
            id: self.id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            status: self.status,
            specialties: self.specialties,
            patients_count: self.patients_count,
            doctors_count: self.doctors_count,
            date_created,
        })
    }
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    patient_count: usize,
    user_count: usize,
    log_count: usize,
}
