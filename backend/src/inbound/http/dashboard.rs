//! Dashboard handler.

use actix_web::{get, web};

use crate::domain::DashboardSummary;
use crate::inbound::http::state::HttpState;

/// Headline figures for the dashboard.
#[get("/dashboard")]
pub async fn dashboard(state: web::Data<HttpState>) -> web::Json<DashboardSummary> {
    web::Json(state.dashboard.summary())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    use super::*;
    use crate::test_support::fixture_http_state;

    #[actix_web::test]
    async fn summary_reflects_the_fixture_records() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_http_state()))
                .service(web::scope("/api/v1").service(dashboard)),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/api/v1/dashboard").to_request();
        let body: Value =
            actix_test::read_body_json(actix_test::call_service(&app, request).await).await;

        assert_eq!(body.get("totalPractices").and_then(Value::as_u64), Some(6));
        assert_eq!(body.get("activePractices").and_then(Value::as_u64), Some(4));
        assert_eq!(body.get("totalPatients").and_then(Value::as_u64), Some(50));
        assert_eq!(body.get("totalUsers").and_then(Value::as_u64), Some(24));

        let progress = body.get("progress").expect("progress");
        let grouped: u64 = ["pending", "registered", "postTreatment"]
            .iter()
            .filter_map(|key| progress.get(key).and_then(Value::as_u64))
            .sum();
        assert_eq!(grouped, 50);

        let logs = body.get("logBreakdown").expect("log breakdown");
        let outcomes: u64 = ["success", "warning", "error"]
            .iter()
            .filter_map(|key| logs.get(key).and_then(Value::as_u64))
            .sum();
        assert_eq!(outcomes, 50);

        let recent: Vec<&str> = body
            .get("recentPractices")
            .and_then(Value::as_array)
            .expect("recent practices")
            .iter()
            .filter_map(|p| p.get("id").and_then(Value::as_str))
            .collect();
        assert_eq!(recent.len(), 5);
        assert!(!recent.contains(&"1"), "oldest practice is dropped");

        let newest_label = body
            .get("recentPractices")
            .and_then(|cards| cards.get(0))
            .and_then(|card| card.get("createdLabel"))
            .and_then(Value::as_str);
        assert_eq!(newest_label, Some("30/07/2024"));
    }
}
