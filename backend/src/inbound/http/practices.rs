//! Practice roster handlers.
//!
//! ```text
//! GET /api/v1/practices?q=cape&status=active
//! POST /api/v1/practices {"name":"...","telephone":"...","email":"...","address":"..."}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::domain::{ListPage, Practice, PracticeForm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::query_state;
use crate::inbound::http::state::HttpState;

/// One page of practices.
#[get("/practices")]
pub async fn list_practices(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ListPage<Practice>>> {
    let query = query_state(&req)?;
    Ok(web::Json(state.listing.list_practices(&query)?))
}

/// Add a practice.
#[post("/practices")]
pub async fn create_practice(
    state: web::Data<HttpState>,
    payload: web::Json<PracticeForm>,
) -> ApiResult<HttpResponse> {
    let practice = state.roster.create_practice(payload.into_inner())?;
    Ok(HttpResponse::Created().json(practice))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::test_support::{fixture_http_state, fixture_today};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(fixture_http_state()))
            .service(
                web::scope("/api/v1")
                    .service(list_practices)
                    .service(create_practice),
            )
    }

    #[rstest]
    #[case("/api/v1/practices", 6)]
    #[case("/api/v1/practices?status=inactive", 2)]
    #[case("/api/v1/practices?status=all", 6)]
    #[case("/api/v1/practices?q=CAPE", 1)]
    #[case("/api/v1/practices?q=durban", 1)]
    #[actix_web::test]
    async fn listing_applies_search_and_status(#[case] uri: &str, #[case] expected: u64) {
        let app = actix_test::init_service(test_app()).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("total").and_then(Value::as_u64), Some(expected));
    }

    #[rstest]
    #[actix_web::test]
    async fn created_practice_is_numbered_and_dated() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/practices")
            .set_json(json!({
                "name": "Harbour Fertility",
                "telephone": "+27 210 5555",
                "email": "hello@harbourfertility.co.za",
                "address": "8 Dock Road, Cape Town"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("id").and_then(Value::as_str), Some("7"));
        assert_eq!(body.get("status").and_then(Value::as_str), Some("active"));
        assert_eq!(
            body.get("dateCreated").and_then(Value::as_str),
            Some(fixture_today().to_string().as_str())
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn blank_practice_form_is_rejected() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/practices")
            .set_json(json!({}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("details")
                .and_then(|d| d.get("fields"))
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(4)
        );
    }
}
