use actix_web::HttpResponse;
use chrono::Utc;

use crate::models::HealthResponse;
use crate::SERVICE_NAME;

/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        message: format!("{} is running! 🚀", SERVICE_NAME),
    })
}
