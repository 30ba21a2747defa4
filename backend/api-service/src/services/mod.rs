/// Business logic behind the HTTP handlers.
pub mod message_ids;
pub mod user_directory;

pub use message_ids::MessageIdGenerator;
pub use user_directory::{parse_user_id, UserDirectory};
