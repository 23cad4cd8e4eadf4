//! Session token issuing and verification.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::entities::ExtraFields;
use crate::error::AppError;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Claims carried by a session token.
///
/// The login payload is signed as-is. `email` is the only claim the API
/// interprets and it is read through [`TokenClaims::email`], so a payload
/// of any shape still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    #[serde(flatten)]
    pub fields: ExtraFields,
}

impl TokenClaims {
    /// The `email` claim, if it is a string.
    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    /// Returns true if the token was issued for exactly `email`.
    pub fn is_for(&self, email: &str) -> bool {
        self.email() == Some(email)
    }
}

/// Attributes of the session cookie.
///
/// Production front-ends live on another site, so the cookie must be
/// `Secure; SameSite=None`. Local development runs over plain HTTP on the
/// same site and uses `SameSite=Strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub cross_site: bool,
}

impl CookiePolicy {
    pub fn new(production: bool) -> Self {
        Self {
            cross_site: production,
        }
    }

    pub fn secure(&self) -> bool {
        self.cross_site
    }

    pub fn same_site(&self) -> SameSite {
        if self.cross_site {
            SameSite::None
        } else {
            SameSite::Strict
        }
    }
}

/// Issues and verifies HS256-signed session tokens.
///
/// Signing is a pure function of (payload, secret, expiry); the service keeps
/// no state beyond its keys.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    cookie_policy: CookiePolicy,
}

impl AuthService {
    /// Creates a new token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC key shared by signing and verification
    /// - `token_ttl` - validity window of issued tokens
    /// - `cookie_policy` - attributes of the session cookie
    pub fn new(secret: &str, token_ttl: Duration, cookie_policy: CookiePolicy) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_ttl,
            cookie_policy,
        }
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        self.cookie_policy
    }

    /// Signs `payload` into a token valid for the configured TTL.
    ///
    /// Any payload is accepted and signed unchanged, except that
    /// caller-supplied `iat`, `exp` and `nbf` are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry overflows or encoding fails.
    pub fn issue(&self, mut payload: ExtraFields) -> Result<String, AppError> {
        for reserved in ["iat", "exp", "nbf"] {
            payload.remove(reserved);
        }

        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.token_ttl).ok_or_else(|| {
            AppError::internal(
                "Token expiry out of range",
                json!({ "ttl_seconds": self.token_ttl.num_seconds() }),
            )
        })?;
        let claims = TokenClaims {
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            fields: payload,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to sign token", json!({ "reason": e.to_string() }))
        })
    }

    /// Verifies signature and expiry and returns the decoded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] if the token is malformed, signed
    /// with another key, or expired.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "Token expired",
                    ErrorKind::InvalidSignature => "Invalid signature",
                    _ => "Malformed token",
                };
                AppError::unauthenticated("unauthorised token", json!({ "reason": reason }))
            })
    }

    /// Cookie delivering `token` to the browser.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, token))
            .http_only(true)
            .secure(self.cookie_policy.secure())
            .same_site(self.cookie_policy.same_site())
            .path("/")
            .build()
    }

    /// Immediately-expiring replacement for the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.session_cookie(String::new());
        cookie.make_removal();
        cookie
    }
}
