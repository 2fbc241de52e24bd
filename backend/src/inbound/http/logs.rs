//! Audit log handlers.
//!
//! ```text
//! GET /api/v1/logs?q=login&status=error&action=Login&page=0&pageSize=10
//! GET /api/v1/logs/actions
//! ```

use actix_web::{HttpRequest, get, web};

use crate::domain::{ListPage, LogRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::query_state;
use crate::inbound::http::state::HttpState;

/// One page of audit log entries.
#[get("/logs")]
pub async fn list_logs(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ListPage<LogRecord>>> {
    let query = query_state(&req)?;
    Ok(web::Json(state.listing.list_logs(&query)?))
}

/// Distinct log actions for the action filter.
#[get("/logs/actions")]
pub async fn log_actions(state: web::Data<HttpState>) -> web::Json<Vec<String>> {
    web::Json(state.listing.log_actions())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::test_support::fixture_http_state;

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
            .service(web::scope("/api/v1").service(log_actions).service(list_logs))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app()).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn first_page_defaults_to_ten_entries() {
        let (status, body) = get_json("/api/v1/logs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("total").and_then(Value::as_u64), Some(50));
        assert_eq!(body.get("pageSize").and_then(Value::as_u64), Some(10));
        assert_eq!(body.get("pageCount").and_then(Value::as_u64), Some(5));
        assert_eq!(
            body.get("items").and_then(Value::as_array).map(Vec::len),
            Some(10)
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn status_filter_keeps_only_matching_entries() {
        let (status, body) = get_json("/api/v1/logs?status=error&pageSize=25").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.get("items").and_then(Value::as_array).expect("items");
        assert!(
            items
                .iter()
                .all(|item| item.get("status").and_then(Value::as_str) == Some("error"))
        );
    }

    #[rstest]
    #[case("/api/v1/logs?severity=high", "severity", "unknown_filter")]
    #[case("/api/v1/logs?pageSize=50", "pageSize", "unsupported_page_size")]
    #[case("/api/v1/logs?segment=1", "segment", "unknown_segment")]
    #[actix_web::test]
    async fn bad_queries_are_rejected(#[case] uri: &str, #[case] field: &str, #[case] code: &str) {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
        let details = body.get("details").expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
        assert_eq!(details.get("code").and_then(Value::as_str), Some(code));
    }

    #[rstest]
    #[actix_web::test]
    async fn negative_page_is_an_empty_window() {
        let (status, body) = get_json("/api/v1/logs?page=-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("total").and_then(Value::as_u64), Some(50));
        assert_eq!(
            body.get("items").and_then(Value::as_array).map(Vec::len),
            Some(0)
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn actions_are_distinct() {
        let (status, body) = get_json("/api/v1/logs/actions").await;
        assert_eq!(status, StatusCode::OK);
        let actions: Vec<&str> = body
            .as_array()
            .expect("array")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        let mut deduped = actions.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), actions.len());
        assert!(!actions.is_empty());
    }
}
