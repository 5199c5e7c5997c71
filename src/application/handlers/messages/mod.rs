//! Server-side message handlers: store, fetch, count.

mod count_messages;
mod fetch_message;
mod post_message;

pub use count_messages::CountMessagesHandler;
pub use fetch_message::{FetchMessageHandler, FetchMessageQuery};
pub use post_message::{PostMessageCommand, PostMessageHandler};
