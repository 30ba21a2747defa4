//! Middleware shared by every route
//!
//! - `request_id`: tags each request with an `X-Request-ID`
//!
//! Request spans and CORS come from `tracing_actix_web` and `actix_cors`.

pub mod request_id;

pub use request_id::{get_request_id, RequestId, REQUEST_ID_HEADER};
