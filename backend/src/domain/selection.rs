//! Practice selection scoped to navigation.
//!
//! The selected practice lives in an injectable [`SelectionContext`]. Route
//! changes flow through a [`Navigator`], which notifies its listeners; the
//! [`SelectionRouteGuard`] listener clears the selection whenever the new
//! route is neither practice-scoped nor the dashboard.
//!
//! ```
//! use std::sync::Arc;
//!
//! use practice_admin::domain::{Navigator, SelectedPractice, SelectionRouteGuard};
//! use practice_admin::domain::ports::SelectionContext;
//! use practice_admin::outbound::memory::InMemorySelectionContext;
//!
//! let selection = Arc::new(InMemorySelectionContext::default());
//! let navigator = Navigator::new("/")
//!     .with_listener(Arc::new(SelectionRouteGuard::new(selection.clone())));
//!
//! selection.set(SelectedPractice {
//!     id: "1".to_owned(),
//!     name: "Cape Fertility Clinic".to_owned(),
//!     address: "123 Main Street, Cape Town".to_owned(),
//!     phone: "+27 794 3956".to_owned(),
//!     email: "info@capefertility.co.za".to_owned(),
//! });
//! navigator.navigate("/patients");
//! assert!(selection.current().is_some());
//! navigator.navigate("/profile");
//! assert!(selection.current().is_none());
//! ```

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::Error;
use super::ports::{RecordStore, RouteListener, SelectionContext};
use super::records::Practice;

/// Dashboard route; never clears the selection.
pub const DASHBOARD_ROUTE: &str = "/";

/// Route opened after a practice is chosen.
pub const PRACTICE_USERS_ROUTE: &str = "/users";

/// Routes that operate on the selected practice. Sub-paths are included.
pub const PRACTICE_SCOPED_ROUTES: [&str; 3] = ["/practices", "/users", "/patients"];

/// Summary of the practice the console is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPractice {
    /// Practice identifier.
    pub id: String,
    /// Practice name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Telephone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
}

impl From<&Practice> for SelectedPractice {
    fn from(practice: &Practice) -> Self {
        Self {
            id: practice.id.clone(),
            name: practice.name.clone(),
            address: practice.address.clone(),
            phone: practice.phone.clone(),
            email: practice.email.clone(),
        }
    }
}

/// Strip the query string, fragment and trailing slashes from a path.
///
/// The root path stays `/`.
#[must_use]
pub fn normalise_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let without_query = path.get(..end).unwrap_or(path);
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        DASHBOARD_ROUTE
    } else {
        trimmed
    }
}

/// Returns `true` for the dashboard route.
#[must_use]
pub fn is_dashboard(path: &str) -> bool {
    normalise_path(path) == DASHBOARD_ROUTE
}

/// Returns `true` when `path` is one of the practice-scoped routes or a
/// sub-path of one.
///
/// # Examples
/// ```
/// use practice_admin::domain::is_practice_scoped;
///
/// assert!(is_practice_scoped("/patients"));
/// assert!(is_practice_scoped("/users/USR-100?tab=2"));
/// assert!(!is_practice_scoped("/profile"));
/// assert!(!is_practice_scoped("/usersettings"));
/// ```
#[must_use]
pub fn is_practice_scoped(path: &str) -> bool {
    let normalised = normalise_path(path);
    PRACTICE_SCOPED_ROUTES.iter().any(|route| {
        normalised
            .strip_prefix(route)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Route listener clearing the selection when navigation leaves practice
/// scope.
pub struct SelectionRouteGuard {
    selection: Arc<dyn SelectionContext>,
}

impl SelectionRouteGuard {
    /// Guard the given selection context.
    pub fn new(selection: Arc<dyn SelectionContext>) -> Self {
        Self { selection }
    }
}

impl RouteListener for SelectionRouteGuard {
    fn on_route_change(&self, path: &str) {
        if is_practice_scoped(path) || is_dashboard(path) {
            return;
        }
        if self.selection.current().is_some() {
            self.selection.clear();
            info!(path, "practice selection cleared on leaving practice scope");
        }
    }
}

/// Records the active route and notifies listeners in registration order.
pub struct Navigator {
    location: RwLock<String>,
    listeners: Vec<Arc<dyn RouteListener>>,
}

impl Navigator {
    /// Start at `initial` with no listeners.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            location: RwLock::new(initial.into()),
            listeners: Vec::new(),
        }
    }

    /// Register a listener; listeners run in registration order.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn RouteListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// The most recently recorded route.
    #[must_use]
    pub fn location(&self) -> String {
        match self.location.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Record `path` as the active route, then notify every listener.
    ///
    /// Returns the normalised path that was recorded.
    pub fn navigate(&self, path: &str) -> String {
        let normalised = normalise_path(path).to_owned();
        {
            let mut location = match self.location.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            location.clone_from(&normalised);
        }
        debug!(path = %normalised, listeners = self.listeners.len(), "route changed");
        for listener in &self.listeners {
            listener.on_route_change(&normalised);
        }
        normalised
    }
}

/// Selection use-case: choose a practice from the store, then follow the
/// practice card to its user roster.
#[derive(Clone)]
pub struct SelectionService {
    store: Arc<dyn RecordStore>,
    selection: Arc<dyn SelectionContext>,
    navigator: Arc<Navigator>,
}

impl SelectionService {
    /// Wire the use-case to its collaborators.
    pub fn new(
        store: Arc<dyn RecordStore>,
        selection: Arc<dyn SelectionContext>,
        navigator: Arc<Navigator>,
    ) -> Self {
        Self {
            store,
            selection,
            navigator,
        }
    }

    /// The currently selected practice.
    #[must_use]
    pub fn current(&self) -> Option<SelectedPractice> {
        self.selection.current()
    }

    /// Select practice `id` and navigate to its user roster.
    ///
    /// Returns the route navigated to.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `not_found` when no practice has that id.
    pub fn select_practice(&self, id: &str) -> Result<String, Error> {
        let practice = self
            .store
            .find_practice(id)
            .ok_or_else(|| Error::not_found(format!("practice {id} does not exist")))?;
        self.selection.set(SelectedPractice::from(&practice));
        info!(practice_id = %practice.id, "practice selected");
        Ok(self.navigator.navigate(PRACTICE_USERS_ROUTE))
    }

    /// Clear the selection explicitly.
    pub fn clear(&self) {
        self.selection.clear();
    }

    /// Navigate to `path`, letting listeners apply the route rule.
    ///
    /// Returns the recorded path and the selection afterwards.
    pub fn navigate(&self, path: &str) -> (String, Option<SelectedPractice>) {
        let recorded = self.navigator.navigate(path);
        (recorded, self.selection.current())
    }

    /// The active route.
    #[must_use]
    pub fn location(&self) -> String {
        self.navigator.location()
    }
}
