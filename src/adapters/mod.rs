//! Adapters - concrete implementations of the ports.

pub mod client;
pub mod document;
pub mod http;
pub mod store;
