use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const MIN_SECRET_LEN: usize = 32;
const ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";
const BEARER_SCHEME: &str = "bearer";

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("bearer token is missing")]
    MissingToken,

    #[error("bearer token is malformed")]
    MalformedToken,

    #[error("bearer token signature is invalid")]
    BadSignature,

    #[error("bearer token is expired")]
    Expired,

    #[error("token secret is too short (min {MIN_SECRET_LEN} bytes)")]
    SecretTooShort,

    #[error("token ttl must be at least one second")]
    InvalidTtl,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct TokenHeader {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

impl TokenHeader {
    fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: Some(TOKEN_TYPE.to_string()),
        }
    }
}

/// Claims carried by every issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub admin: bool,
    pub name: String,
    /// Unix timestamp in seconds.
    pub exp: u64,
}

impl TokenClaims {
    pub fn is_expired(&self, reference_secs: u64) -> bool {
        reference_secs >= self.exp
    }
}

/// Issues and verifies HS256 bearer tokens with a single symmetric key.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<[u8]>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: Vec<u8>, ttl: Duration) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(TokenError::SecretTooShort);
        }
        if ttl.as_secs() == 0 {
            return Err(TokenError::InvalidTtl);
        }

        Ok(Self {
            secret: Arc::<[u8]>::from(secret),
            ttl,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, name: &str) -> Result<String, TokenError> {
        self.issue_at(name, now_secs())
    }

    pub fn issue_at(&self, name: &str, issued_at_secs: u64) -> Result<String, TokenError> {
        let claims = TokenClaims {
            admin: true,
            name: name.to_string(),
            exp: issued_at_secs.saturating_add(self.ttl.as_secs()),
        };
        self.encode(&claims)
    }

    pub fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let header = serde_json::to_vec(&TokenHeader::hs256())
            .map_err(|err| TokenError::Signing(err.to_string()))?;
        let payload =
            serde_json::to_vec(claims).map_err(|err| TokenError::Signing(err.to_string()))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        );
        let signature = self.sign(signing_input.as_bytes())?;
        Ok(format!(
            "{signing_input}.{}",
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, now_secs())
    }

    pub fn verify_at(&self, token: &str, reference_secs: u64) -> Result<TokenClaims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::MissingToken);
        }

        let mut parts = token.split('.');
        let (header_b64, payload_b64, signature_b64) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(header), Some(payload), Some(signature), None) => {
                    (header, payload, signature)
                }
                _ => return Err(TokenError::MalformedToken),
            };

        let header_bytes = URL_SAFE_NO_PAD
            .decode(header_b64)
            .map_err(|_| TokenError::MalformedToken)?;
        let header: TokenHeader =
            serde_json::from_slice(&header_bytes).map_err(|_| TokenError::MalformedToken)?;

        // The algorithm is pinned; whatever the token declares is only checked, never followed.
        if header.alg != ALGORITHM {
            return Err(TokenError::BadSignature);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::MalformedToken)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| TokenError::BadSignature)?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::MalformedToken)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::MalformedToken)?;

        if claims.is_expired(reference_secs) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, bytes: &[u8]) -> Result<Vec<u8>, TokenError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| TokenError::Signing(err.to_string()))?;
        mac.update(bytes);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

/// Extracts the token from an `Authorization` header value.
pub fn bearer_token(header_value: Option<&str>) -> Result<&str, TokenError> {
    let value = header_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(TokenError::MissingToken)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(TokenError::MalformedToken)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(TokenError::MalformedToken);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(' ') {
        return Err(TokenError::MalformedToken);
    }

    Ok(token)
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
