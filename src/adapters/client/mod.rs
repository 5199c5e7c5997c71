//! Message API client adapters.

mod http_client;

pub use http_client::{HttpMessageApi, MessageApiConfig};
