/// User handlers - read-only views over the mock directory
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::{AppError, Result};
use crate::middleware::get_request_id;
use crate::models::ApiResponse;
use crate::services::UserDirectory;

/// GET /api/users
pub async fn list_users() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::list(UserDirectory.all().to_vec()))
}

/// GET /api/users/{id}
///
/// The id is taken as a raw string and parsed leniently, so `abc` is a
/// plain 404 rather than a path extraction error.
pub async fn get_user(req: HttpRequest, raw_id: web::Path<String>) -> Result<HttpResponse> {
    let request_id = get_request_id(&req);
    tracing::debug!(
        user_id = %raw_id,
        request_id = request_id.as_deref().unwrap_or("-"),
        "Looking up user"
    );

    match UserDirectory.find_raw(&raw_id) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::ok(user))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
