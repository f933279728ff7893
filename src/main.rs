mod config;
mod controllers;
mod models;
mod routes;
mod services;
mod utils;

use crate::config::loader::Config;
use crate::services::cloudinary::CloudinaryStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(CloudinaryStore::new(&config));

    let app = routes::router::create_routes(store, config.clone());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
