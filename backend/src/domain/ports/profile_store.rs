//! Driven port holding the signed-in administrator's profile.

use crate::domain::profile::Profile;

/// Storage for the single administrator profile.
pub trait ProfileStore: Send + Sync {
    /// The stored profile.
    fn load(&self) -> Profile;

    /// Replace the stored profile.
    fn save(&self, profile: Profile);
}
