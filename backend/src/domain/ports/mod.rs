//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Services depend on these traits; `outbound::memory` provides the
//! in-process adapters the server wires in.

mod profile_store;
mod record_store;
mod route_listener;
mod selection_context;

pub use profile_store::ProfileStore;
pub use record_store::{NewPractice, NewUser, RecordStore};
pub use route_listener::RouteListener;
pub use selection_context::SelectionContext;
