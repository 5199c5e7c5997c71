//! HTTP adapter for the message API.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, MessageCountResponse, MessageResponse};
pub use handlers::MessageHandlers;
pub use routes::{app, message_routes};
