//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain use-cases and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{ProfileStore, RecordStore, SelectionContext};
use crate::domain::{
    DASHBOARD_ROUTE, DashboardService, ListingService, Navigator, ProfileService, RosterService,
    SelectionRouteGuard, SelectionService,
};

/// Parameter object bundling the port implementations handlers need.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Listed records.
    pub records: Arc<dyn RecordStore>,
    /// The session's practice selection.
    pub selection: Arc<dyn SelectionContext>,
    /// The administrator profile.
    pub profiles: Arc<dyn ProfileStore>,
    /// Source of "now" for segment rules and creation dates.
    pub clock: Arc<dyn Clock>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Search, filter and pagination over every record type.
    pub listing: ListingService,
    /// Practice selection and navigation.
    pub selection: SelectionService,
    /// Creating users and practices.
    pub roster: RosterService,
    /// Headline figures.
    pub dashboard: DashboardService,
    /// Administrator profile.
    pub profile: ProfileService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            records,
            selection,
            profiles,
            clock,
        } = ports;
        let navigator = Navigator::new(DASHBOARD_ROUTE)
            .with_listener(Arc::new(SelectionRouteGuard::new(selection.clone())));
        Self {
            listing: ListingService::new(records.clone(), clock),
            selection: SelectionService::new(records.clone(), selection.clone(), Arc::new(navigator)),
            roster: RosterService::new(records.clone(), selection),
            dashboard: DashboardService::new(records),
            profile: ProfileService::new(profiles),
        }
    }
}
