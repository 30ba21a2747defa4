use actix_web::{HttpRequest, HttpResponse};

use crate::error::{AppError, Result};
use crate::middleware::get_request_id;

/// Catch-all for anything under `/api` that no route handles.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());

    let request_id = get_request_id(&req);
    tracing::debug!(
        method = %req.method(),
        target = %target,
        request_id = request_id.as_deref().unwrap_or("-"),
        "No route matched"
    );

    Err(AppError::NotFound(format!(
        "Endpoint {} {} not found",
        req.method(),
        target
    )))
}
