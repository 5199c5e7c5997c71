//! Message API server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use message_board::adapters::http::{app, MessageHandlers};
use message_board::adapters::store::{InMemoryMessageStore, UuidIdGenerator};
use message_board::application::handlers::messages::{
    CountMessagesHandler, FetchMessageHandler, PostMessageHandler,
};
use message_board::config::{AppConfig, ConfigError};

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let table_name = config.deployment.resource_name("MessageTable");
    tracing::info!(
        stage = %config.deployment.stage,
        table = %table_name,
        "starting message server"
    );

    let store = Arc::new(InMemoryMessageStore::new(table_name));
    let handlers = MessageHandlers::new(
        Arc::new(PostMessageHandler::new(
            store.clone(),
            Arc::new(UuidIdGenerator),
        )),
        Arc::new(FetchMessageHandler::new(store.clone())),
        Arc::new(CountMessagesHandler::new(store)),
    );

    let router = app(handlers, config.server.request_timeout());
    let addr = config.server.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("message API listening on {}", addr);
    axum::serve(listener, router).await.expect("Server error");
}
