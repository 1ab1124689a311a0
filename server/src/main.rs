use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use anyhow::Context;

use catalog_server::catalog::Catalog;
use catalog_server::config::{signing_secret_from_env, ServerConfig};
use catalog_server::routes;
use catalog_server::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (for development)
    // Try loading from current directory first, then from server/ directory
    if dotenvy::dotenv().is_err() {
        dotenvy::from_filename("server/.env").ok();
    }

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting Catalog API...");

    // Load configuration
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "server/config/server.toml".to_string());

    let config = ServerConfig::load(&config_path)
        .with_context(|| format!("failed to load server configuration from '{config_path}'"))?;

    let signing_secret = signing_secret_from_env()
        .context("a token signing secret is required")?;

    let catalog = Catalog::seeded();
    log::info!("Catalog seeded with {} products", catalog.len());

    let state = AppState::new(&config, catalog, signing_secret)
        .context("failed to initialize application state")?;
    log::info!(
        "Issuing tokens for '{}' valid for {} hours",
        state.token_subject,
        config.auth.token_ttl_hours
    );

    let (host, port) = config.bind_addr();
    log::info!("Starting HTTP server at {}:{}...", host, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(actix_middleware::Logger::default())
            .wrap(actix_middleware::Compress::default())
            .configure(routes::configure)
    })
    .bind((host, port))
    .context("failed to bind HTTP listener")?
    .run()
    .await
    .context("HTTP server terminated with an error")?;

    Ok(())
}
