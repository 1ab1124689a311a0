use std::path::PathBuf;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use catalog_server::auth_token::{now_secs, TokenClaims, TokenService};
use catalog_server::catalog::Catalog;
use catalog_server::config::ServerConfig;
use catalog_server::state::AppState;

pub const TEST_SECRET: &[u8] = b"test-signing-secret-0123456789abcdef";

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn test_state() -> AppState {
    let mut config = ServerConfig::default();
    config.auth.subject = "integration".to_string();
    config.assets.views_dir = fixtures_dir().join("views");
    config.assets.static_dir = fixtures_dir().join("static");

    AppState::new(&config, Catalog::seeded(), TEST_SECRET.to_vec()).expect("valid state")
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[allow(dead_code)]
pub fn valid_token(state: &AppState) -> String {
    state.tokens.issue("integration").expect("issue token")
}

#[allow(dead_code)]
pub fn foreign_token() -> String {
    TokenService::new(
        b"some-other-secret-some-other-secret".to_vec(),
        state_ttl(),
    )
    .expect("valid service")
    .issue("intruder")
    .expect("issue token")
}

/// Signs `claims` under an arbitrary header, for tokens the server must refuse.
#[allow(dead_code)]
pub fn signed_with_header(header: &str, key: &[u8]) -> String {
    let claims = TokenClaims {
        admin: true,
        name: "intruder".to_string(),
        exp: now_secs() + 3600,
    };
    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).expect("claims json"))
    );
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("hmac key");
    mac.update(signing_input.as_bytes());
    let signature = mac.finalize().into_bytes();
    format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature))
}

#[allow(dead_code)]
pub fn unsigned_token() -> String {
    let forged = signed_with_header(r#"{"alg":"none","typ":"JWT"}"#, TEST_SECRET);
    let (unsigned, _) = forged.rsplit_once('.').expect("three parts");
    format!("{unsigned}.")
}

fn state_ttl() -> std::time::Duration {
    ServerConfig::default().token_ttl()
}
