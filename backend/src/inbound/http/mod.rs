//! HTTP inbound adapter exposing the console's REST endpoints.
//!
//! Every handler lives under `/api/v1` and exchanges camelCase JSON. List
//! endpoints read their query state straight from the URL query string.

pub mod dashboard;
pub mod error;
pub mod health;
pub mod logs;
pub mod patients;
pub mod practices;
pub mod profile;
pub mod query;
pub mod selection;
pub mod state;
pub mod users;

pub use error::ApiResult;
