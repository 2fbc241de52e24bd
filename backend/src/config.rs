//! Server configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, `PRACTICE_ADMIN_*` environment variables and
//! command-line flags.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SEED_NAME: &str = "mossy-owl";

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Configuration values for the admin console server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRACTICE_ADMIN")]
pub struct AdminSettings {
    /// Socket address the HTTP server binds.
    pub bind_addr: Option<String>,
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
}

impl AdminSettings {
    /// Return the configured bind address, falling back to the default.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured seed name, falling back to the default.
    #[must_use]
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Return the configured registry path, falling back to the default.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 3] = [
        "PRACTICE_ADMIN_BIND_ADDR",
        "PRACTICE_ADMIN_SEED_NAME",
        "PRACTICE_ADMIN_REGISTRY_PATH",
    ];

    fn load_from_empty_args() -> AdminSettings {
        AdminSettings::load_from_iter([OsString::from("practice-admin")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.seed_name(), DEFAULT_SEED_NAME);
        assert_eq!(settings.registry_path(), default_registry_path());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PRACTICE_ADMIN_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("PRACTICE_ADMIN_SEED_NAME", Some("snowy-penguin".to_owned())),
            (
                "PRACTICE_ADMIN_REGISTRY_PATH",
                Some("/tmp/practice_registry.json".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
        assert_eq!(settings.seed_name(), "snowy-penguin");
        assert_eq!(
            settings.registry_path(),
            PathBuf::from("/tmp/practice_registry.json")
        );
    }
}
