//! Staff roster handlers.
//!
//! ```text
//! GET /api/v1/users?role=doctor&status=active
//! POST /api/v1/users {"firstName":"Sarah","lastName":"Williams","email":"...","role":"doctor","status":"active"}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::domain::{ListPage, UserForm, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::query_state;
use crate::inbound::http::state::HttpState;

/// One page of staff members.
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ListPage<UserRecord>>> {
    let query = query_state(&req)?;
    Ok(web::Json(state.listing.list_users(&query)?))
}

/// Add a staff member. A blank practice means the selected practice.
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserForm>,
) -> ApiResult<HttpResponse> {
    let user = state.roster.create_user(payload.into_inner())?;
    Ok(HttpResponse::Created().json(user))
}
