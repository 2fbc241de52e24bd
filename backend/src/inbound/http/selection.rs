//! Practice selection and navigation handlers.
//!
//! ```text
//! GET /api/v1/selection
//! PUT /api/v1/selection {"practiceId":"1"}
//! DELETE /api/v1/selection
//! GET /api/v1/navigation
//! POST /api/v1/navigation {"path":"/profile"}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::SelectedPractice;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body choosing a practice.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPracticeRequest {
    /// Identifier of the practice to select.
    pub practice_id: String,
}

/// Request body recording a route change.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateRequest {
    /// Route the console moved to.
    pub path: String,
}

/// Active route and practice selection.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Active route.
    pub path: String,
    /// Selected practice, absent when none is chosen.
    pub selection: Option<SelectedPractice>,
}

fn navigation_state(state: &HttpState) -> web::Json<NavigationState> {
    web::Json(NavigationState {
        path: state.selection.location(),
        selection: state.selection.current(),
    })
}

/// Current selection.
#[get("/selection")]
pub async fn current_selection(state: web::Data<HttpState>) -> web::Json<NavigationState> {
    navigation_state(&state)
}

/// Select a practice and follow it to the user roster.
#[put("/selection")]
pub async fn select_practice(
    state: web::Data<HttpState>,
    payload: web::Json<SelectPracticeRequest>,
) -> ApiResult<web::Json<NavigationState>> {
    let path = state.selection.select_practice(&payload.practice_id)?;
    Ok(web::Json(NavigationState {
        path,
        selection: state.selection.current(),
    }))
}

/// Clear the selection.
#[delete("/selection")]
pub async fn clear_selection(state: web::Data<HttpState>) -> HttpResponse {
    state.selection.clear();
    HttpResponse::NoContent().finish()
}

/// Active route and selection; same payload as `GET /selection`.
#[get("/navigation")]
pub async fn current_route(state: web::Data<HttpState>) -> web::Json<NavigationState> {
    navigation_state(&state)
}

/// Record a route change and apply the practice-scope rule.
#[post("/navigation")]
pub async fn navigate(
    state: web::Data<HttpState>,
    payload: web::Json<NavigateRequest>,
) -> web::Json<NavigationState> {
    let (path, selection) = state.selection.navigate(&payload.path);
    web::Json(NavigationState { path, selection })
}
