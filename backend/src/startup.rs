//! Startup wiring: load the seed registry, generate the records and build the
//! handler state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use example_data::{GenerationError, RegistryError, SeedRegistry, generate_example_dataset};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::config::AdminSettings;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryProfileStore, InMemoryRecordStore, InMemorySelectionContext};

/// Errors returned while preparing the server state.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Record generation failed.
    #[error("example data generation error: {0}")]
    Generation(#[from] GenerationError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Read and parse the seed registry at `path`.
///
/// # Errors
///
/// Returns [`StartupError::RegistryRead`] when the file cannot be read and
/// [`StartupError::Registry`] when it does not parse.
pub fn load_registry(path: &Path) -> Result<SeedRegistry, StartupError> {
    let read_error = |source: std::io::Error| StartupError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}

/// Generate the configured seed's records, anchored to the clock's today so
/// visit and appointment segments stay current.
///
/// # Errors
///
/// Returns [`StartupError`] when the seed name is blank, unknown, or the
/// registry cannot be read or generated from.
pub fn load_records(
    settings: &AdminSettings,
    clock: Arc<dyn Clock>,
) -> Result<InMemoryRecordStore, StartupError> {
    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupError::EmptySeedName);
    }

    let registry_path = settings.registry_path();
    let registry = load_registry(&registry_path)?.with_reference_date(clock.utc().date_naive());
    let seed = registry.find_seed(seed_name)?;
    let dataset = generate_example_dataset(&registry, seed)?;
    info!(
        seed_key = seed_name,
        registry = %registry_path.display(),
        practices = dataset.practices.len(),
        patients = dataset.patients.len(),
        users = dataset.users.len(),
        logs = dataset.logs.len(),
        "example records loaded"
    );
    Ok(InMemoryRecordStore::from_dataset(dataset, clock))
}

/// Build the handler state over freshly generated records.
///
/// # Errors
///
/// See [`load_records`].
pub fn build_http_state(
    settings: &AdminSettings,
    clock: Arc<dyn Clock>,
) -> Result<HttpState, StartupError> {
    let records = load_records(settings, clock.clone())?;
    Ok(HttpState::from(HttpStatePorts {
        records: Arc::new(records),
        selection: Arc::new(InMemorySelectionContext::default()),
        profiles: Arc::new(InMemoryProfileStore::default()),
        clock,
    }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::RecordStore;
    use crate::test_support::{FixtureClock, fixture_registry_path};

    fn settings(seed_name: &str, registry_path: PathBuf) -> AdminSettings {
        AdminSettings {
            bind_addr: None,
            seed_name: Some(seed_name.to_owned()),
            registry_path: Some(registry_path),
        }
    }

    #[rstest]
    fn loads_the_configured_seed() {
        let store = load_records(
            &settings("snowy-penguin", fixture_registry_path()),
            Arc::new(FixtureClock),
        )
        .expect("records load");
        assert_eq!(store.patients().len(), 12);
        assert_eq!(store.users().len(), 6);
        assert_eq!(store.logs().len(), 20);
        assert_eq!(store.practices().len(), 6);
    }

    #[rstest]
    #[case("   ")]
    #[case("")]
    fn blank_seed_name_is_rejected(#[case] seed_name: &str) {
        let result = load_records(
            &settings(seed_name, fixture_registry_path()),
            Arc::new(FixtureClock),
        );
        assert!(matches!(result, Err(StartupError::EmptySeedName)));
    }

    #[rstest]
    fn unknown_seed_is_a_registry_error() {
        let result = load_records(
            &settings("purple-yak", fixture_registry_path()),
            Arc::new(FixtureClock),
        );
        assert!(matches!(
            result,
            Err(StartupError::Registry(RegistryError::SeedNotFound { .. }))
        ));
    }

    #[rstest]
    fn missing_registry_reports_the_path() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/missing.json");
        let result = load_registry(&path);
        match result {
            Err(StartupError::RegistryRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
