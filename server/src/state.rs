use std::path::PathBuf;

use crate::auth_token::TokenService;
use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::error::{ApiError, Result};

/// Application state built once at startup and shared read-only by every
/// worker through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub tokens: TokenService,
    pub token_subject: String,
    pub views_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig, catalog: Catalog, signing_secret: Vec<u8>) -> Result<Self> {
        let tokens = TokenService::new(signing_secret, config.token_ttl())
            .map_err(|err| ApiError::Config(err.to_string()))?;

        Ok(Self {
            catalog,
            tokens,
            token_subject: config.auth.subject.clone(),
            views_dir: config.assets.views_dir.clone(),
            static_dir: config.assets.static_dir.clone(),
        })
    }
}
