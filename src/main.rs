use std::str::FromStr;

use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{
    config::config::CONFIG,
    server::{app_state::AppState, router::create_router},
};

mod category;
mod config;
mod health;
mod mw;
mod question;
mod quiz;
mod server;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let level = LevelFilter::from_str(&CONFIG.server.log_level).unwrap_or(LevelFilter::DEBUG);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_connection_string(&CONFIG.database_url, CONFIG.server.page_size)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    // Initialize routes
    let app = create_router(state);

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap_or_else(|e| panic!("Failed to bind listener: {}", e));

    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on address: {}", addr);
    }

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("Server stopped: {}", e));
}
