//! The signed-in administrator's profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::Error;
use super::format::initials;
use super::forms::ProfileForm;
use super::ports::ProfileStore;

/// Administrator profile shown in the header and the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Telephone number.
    pub phone: String,
}

impl Profile {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile as shown in the header: the stored fields plus the name and the
/// avatar initials derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// Stored profile.
    #[serde(flatten)]
    pub profile: Profile,
    /// `first_name last_name`.
    pub display_name: String,
    /// Avatar initials.
    pub initials: String,
}

impl From<Profile> for ProfileView {
    fn from(profile: Profile) -> Self {
        let display_name = profile.display_name();
        Self {
            initials: initials(&display_name),
            display_name,
            profile,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "Adrian".to_owned(),
            last_name: "Stefan".to_owned(),
            email: "adrian@mrfertility.co.za".to_owned(),
            phone: "+27 123 4567".to_owned(),
        }
    }
}

/// Profile page use-case.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    /// Build the service over a profile store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// The stored profile.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.store.load()
    }

    /// Validate `form` and replace the stored profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` listing every rejected field.
    pub fn update(&self, form: ProfileForm) -> Result<Profile, Error> {
        let profile = form.validate()?;
        self.store.save(profile.clone());
        info!("profile updated");
        Ok(profile)
    }
}
