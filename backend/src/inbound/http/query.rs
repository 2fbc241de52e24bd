//! Reading list query state from request URLs.

use actix_web::HttpRequest;
use list_query::QueryState;

use crate::domain::Error;

/// Parse the request's query string into a [`QueryState`].
///
/// # Errors
///
/// Returns [`Error`] with `invalid_request` when a numeric parameter does not
/// parse or the page size is unsupported.
pub fn query_state(req: &HttpRequest) -> Result<QueryState, Error> {
    Ok(QueryState::from_query_string(req.query_string())?)
}
