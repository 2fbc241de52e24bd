//! Practice admin console backend.
//!
//! Serves searchable, filterable and paginated listings of audit logs,
//! patients, staff and practices; keeps a practice selection scoped to
//! navigation; and summarises everything on a dashboard.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod startup;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::AdminSettings;
pub use middleware::Trace;
