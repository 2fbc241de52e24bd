//! Server construction and middleware wiring.

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::dashboard::dashboard;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::logs::{list_logs, log_actions};
use crate::inbound::http::patients::{list_patients, patient_segments};
use crate::inbound::http::practices::{create_practice, list_practices};
use crate::inbound::http::profile::{get_profile, update_profile};
use crate::inbound::http::selection::{
    clear_selection, current_route, current_selection, navigate, select_practice,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users};
use crate::middleware::Trace;

/// Register every `/api/v1` handler on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(log_actions)
            .service(list_logs)
            .service(patient_segments)
            .service(list_patients)
            .service(list_users)
            .service(create_user)
            .service(list_practices)
            .service(create_practice)
            .service(current_selection)
            .service(select_practice)
            .service(clear_selection)
            .service(current_route)
            .service(navigate)
            .service(dashboard)
            .service(get_profile)
            .service(update_profile),
    );
}

/// Assemble the application: state, tracing middleware, API and probes.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server bound to `bind_addr`.
///
/// Marks `health_state` ready once the socket is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    bind_addr: &str,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
