//! Observer port notified after every navigation.

/// Receives the new path after the navigator records a route change.
pub trait RouteListener: Send + Sync {
    /// React to the active route becoming `path`.
    fn on_route_change(&self, path: &str);
}
