//! Administrator profile handlers.
//!
//! ```text
//! GET /api/v1/profile
//! PUT /api/v1/profile {"firstName":"Adrian","lastName":"Stefan","email":"...","phone":"..."}
//! ```

use actix_web::{get, put, web};

use crate::domain::{ProfileForm, ProfileView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// The signed-in administrator's profile with header display fields.
#[get("/profile")]
pub async fn get_profile(state: web::Data<HttpState>) -> web::Json<ProfileView> {
    web::Json(state.profile.profile().into())
}

/// Replace the profile after validation.
#[put("/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    payload: web::Json<ProfileForm>,
) -> ApiResult<web::Json<ProfileView>> {
    Ok(web::Json(state.profile.update(payload.into_inner())?.into()))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

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
            .service(
                web::scope("/api/v1")
                    .service(get_profile)
                    .service(update_profile),
            )
    }

    #[rstest]
    #[actix_web::test]
    async fn update_replaces_the_profile() {
        let app = actix_test::init_service(test_app()).await;
        let update = actix_test::TestRequest::put()
            .uri("/api/v1/profile")
            .set_json(json!({
                "firstName": "Adriana",
                "lastName": "Stefan",
                "email": "adriana@mrfertility.co.za",
                "phone": "+27 123 4568"
            }))
            .to_request();
        assert_eq!(actix_test::call_service(&app, update).await.status(), StatusCode::OK);

        let fetched: Value = actix_test::read_body_json(
            actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri("/api/v1/profile").to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(fetched.get("firstName").and_then(Value::as_str), Some("Adriana"));
        assert_eq!(fetched.get("initials").and_then(Value::as_str), Some("AS"));
    }

    #[rstest]
    #[actix_web::test]
    async fn invalid_email_keeps_the_old_profile() {
        let app = actix_test::init_service(test_app()).await;
        let update = actix_test::TestRequest::put()
            .uri("/api/v1/profile")
            .set_json(json!({
                "firstName": "Adrian",
                "lastName": "Stefan",
                "email": "adrian-at-home",
                "phone": "+27 123 4567"
            }))
            .to_request();
        let response = actix_test::call_service(&app, update).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let fetched: Value = actix_test::read_body_json(
            actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri("/api/v1/profile").to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(
            fetched.get("email").and_then(Value::as_str),
            Some("adrian@mrfertility.co.za")
        );
    }
}
