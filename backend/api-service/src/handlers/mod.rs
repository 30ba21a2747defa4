/// HTTP handlers for the mock API
///
/// Every route lives under `/api`. Unknown paths, and known paths hit with an
/// unsupported method, fall through to [`fallback::not_found`].
pub mod fallback;
pub mod health;
pub mod info;
pub mod messages;
pub mod users;

use actix_web::{guard, web, Route};

use crate::error::AppError;

pub use fallback::not_found;
pub use health::health_check;
pub use info::service_info;
pub use messages::create_message;
pub use users::{get_user, list_users};

/// GET route that also answers HEAD, as the original Express routes do.
fn get_or_head() -> Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}

/// Mount the `/api` scope. Shared by the binary and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::from(err).into());

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .service(
                web::resource("/health")
                    .route(get_or_head().to(health_check))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/users")
                    .route(get_or_head().to(list_users))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/users/{id}")
                    .route(get_or_head().to(get_user))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/messages")
                    .route(web::post().to(create_message))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/info")
                    .route(get_or_head().to(service_info))
                    .default_service(web::to(not_found)),
            )
            .default_service(web::to(not_found)),
    );
}
