/// Message handlers - accepts contact messages and echoes them back
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::error::Result;
use crate::middleware::get_request_id;
use crate::models::{ApiResponse, Message, NewMessage};
use crate::AppState;

/// POST /api/messages
///
/// Nothing is persisted; the response is the only record of the message.
pub async fn create_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<NewMessage>,
) -> Result<HttpResponse> {
    let body = payload.into_inner().validate()?;
    let message = Message::new(state.message_ids.next_id(), body, Utc::now());

    let request_id = get_request_id(&req);
    tracing::info!(
        message_id = message.id,
        request_id = request_id.as_deref().unwrap_or("-"),
        "Message received"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(message).with_message("Message received!")))
}
