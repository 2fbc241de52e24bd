//! Deterministic example practice data for demonstration purposes.
//!
//! This crate generates believable, reproducible patients, practice staff and
//! audit log entries from a JSON seed registry. It is independent of backend
//! domain types to avoid circular dependencies; the backend converts the seed
//! records into its own types at load time.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries (practice roster plus named seeds) from JSON
//! - Deterministic dataset generation using named seeds
//! - Re-anchoring generated timelines to another reference date
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_dataset};
//!
//! let json = r#"{
//!     "version": 1,
//!     "referenceDate": "2026-10-19",
//!     "practices": [{
//!         "id": "1", "name": "Cape Fertility Clinic",
//!         "address": "123 Main Street, Cape Town", "phone": "+27 794 3956",
//!         "email": "info@capefertility.co.za", "status": "active",
//!         "dateCreated": "2023-01-15"
//!     }],
//!     "seeds": [{"name": "test-seed", "seed": 42, "patientCount": 3, "userCount": 2, "logCount": 5}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let dataset = generate_example_dataset(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(dataset.patients.len(), 3);
//! assert_eq!(dataset.practices.len(), 1);
//! ```

mod contact;
mod error;
mod generator;
mod registry;
mod seed;

pub use contact::{EXAMPLE_EMAIL_DOMAIN, email_for};
pub use error::{GenerationError, RegistryError};
pub use generator::{LOG_ACTIONS, SYSTEM_USER, generate_example_dataset};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{
    ExampleDataset, ExampleLogSeed, ExamplePatientSeed, ExamplePracticeSeed, ExampleUserSeed,
    GenderSeed, LogStatusSeed, PatientStatusSeed, PracticeStatusSeed, UserRoleSeed,
    UserStatusSeed,
};
