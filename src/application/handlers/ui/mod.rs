//! UI-facing handlers, one per page action.
//!
//! Each handler is a stateless one-shot: resolve the page elements, make
//! one remote call, write one output. Missing elements end the handler
//! silently; remote failures surface to the caller's error channel.
//! Concurrent invocations are independent; nothing debounces or cancels.

mod create_message;
mod get_message;
mod get_message_count;

pub use create_message::CreateMessageHandler;
pub use get_message::GetMessageHandler;
pub use get_message_count::GetMessageCountHandler;
