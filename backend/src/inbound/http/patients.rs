//! Patient roster handler.
//!
//! ```text
//! GET /api/v1/patients?q=smith&status=active&practice=Cape%20Fertility%20Clinic&segment=1
//! GET /api/v1/patients/segments
//! ```

use actix_web::{HttpRequest, get, web};

use crate::domain::{ListPage, PatientRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::query_state;
use crate::inbound::http::state::HttpState;

/// One page of patients. Segment 1 holds upcoming appointments and segment 2
/// recent visits.
#[get("/patients")]
pub async fn list_patients(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ListPage<PatientRecord>>> {
    let query = query_state(&req)?;
    Ok(web::Json(state.listing.list_patients(&query)?))
}

/// Segment tab labels; the position of a label is its `segment` value.
#[get("/patients/segments")]
pub async fn patient_segments(state: web::Data<HttpState>) -> web::Json<Vec<&'static str>> {
    web::Json(state.listing.patient_segments())
}
