//! Creating staff members and practices from validated forms.

use std::sync::Arc;

use tracing::info;

use super::error::Error;
use super::forms::{PracticeForm, UserForm};
use super::ports::{RecordStore, SelectionContext};
use super::records::{Practice, UserRecord};

/// Roster maintenance use-case.
#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn RecordStore>,
    selection: Arc<dyn SelectionContext>,
}

impl RosterService {
    /// Wire the use-case to its collaborators.
    pub fn new(store: Arc<dyn RecordStore>, selection: Arc<dyn SelectionContext>) -> Self {
        Self { store, selection }
    }

    /// Validate `form` and add the staff member.
    ///
    /// A blank practice falls back to the selected practice.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` listing every rejected field.
    pub fn create_user(&self, form: UserForm) -> Result<UserRecord, Error> {
        let mut user = form.validate()?;
        if user.practice.is_empty() {
            if let Some(selected) = self.selection.current() {
                user.practice = selected.name;
            }
        }
        let record = self.store.add_user(user);
        info!(user_id = %record.id, role = %record.role, "user created");
        Ok(record)
    }

    /// Validate `form` and add the practice.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `invalid_request` listing every rejected field.
    pub fn create_practice(&self, form: PracticeForm) -> Result<Practice, Error> {
        let practice = self.store.add_practice(form.validate()?);
        info!(practice_id = %practice.id, "practice created");
        Ok(practice)
    }
}
