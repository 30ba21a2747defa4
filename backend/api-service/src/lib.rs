pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::*;
pub use services::*;

/// Display name reported by `/api/health` and `/api/info`.
pub const SERVICE_NAME: &str = "check-cicd API";

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// Deployment label reported by `/api/info`.
    pub environment: String,
    pub message_ids: MessageIdGenerator,
}

impl AppState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            message_ids: MessageIdGenerator::new(),
        }
    }
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self::new(config.app_env.clone())
    }
}
