use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::models::ServiceInfo;
use crate::{AppState, SERVICE_NAME};

const ENDPOINTS: [&str; 5] = [
    "GET  /api/health   - Health check",
    "GET  /api/users    - List all users",
    "GET  /api/users/:id - Get user by ID",
    "POST /api/messages - Create a message",
    "GET  /api/info     - API information",
];

/// GET /api/info
pub async fn service_info(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.clone(),
        deployed_at: Utc::now(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
