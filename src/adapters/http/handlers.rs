//! HTTP handlers for message endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::messages::{
    CountMessagesHandler, FetchMessageHandler, FetchMessageQuery, PostMessageCommand,
    PostMessageHandler,
};
use crate::domain::MessageError;

use super::dto::{ErrorResponse, MessageCountResponse, MessageResponse};

/// Handler state shared across message routes.
#[derive(Clone)]
pub struct MessageHandlers {
    post_handler: Arc<PostMessageHandler>,
    fetch_handler: Arc<FetchMessageHandler>,
    count_handler: Arc<CountMessagesHandler>,
}

impl MessageHandlers {
    pub fn new(
        post_handler: Arc<PostMessageHandler>,
        fetch_handler: Arc<FetchMessageHandler>,
        count_handler: Arc<CountMessagesHandler>,
    ) -> Self {
        Self {
            post_handler,
            fetch_handler,
            count_handler,
        }
    }
}

/// POST /messages - Store a new message
///
/// The body is the raw message text; a body wrapped in one pair of double
/// quotes (a JSON string) is unwrapped before storage.
pub async fn post_message(State(handlers): State<MessageHandlers>, body: String) -> Response {
    let command = PostMessageCommand { message: body };

    match handlers.post_handler.handle(command).await {
        Ok(record) => {
            let response: MessageResponse = record.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_message_error(e),
    }
}

/// GET /messages/:message_id - Fetch a message by id
pub async fn get_message(
    State(handlers): State<MessageHandlers>,
    Path(message_id): Path<String>,
) -> Response {
    let query = FetchMessageQuery { message_id };

    match handlers.fetch_handler.handle(query).await {
        Ok(record) => {
            let response: MessageResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_message_error(e),
    }
}

/// GET /messages - Get the total message count
pub async fn get_message_count(State(handlers): State<MessageHandlers>) -> Response {
    match handlers.count_handler.handle().await {
        Ok(count) => {
            let response: MessageCountResponse = count.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_message_error(e),
    }
}

/// Maps message errors to HTTP responses.
fn handle_message_error(error: MessageError) -> Response {
    match error {
        MessageError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("message {id} not found"))),
        )
            .into_response(),
        MessageError::Backend(reason) => {
            tracing::error!(%reason, "message store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal error")),
            )
                .into_response()
        }
    }
}
