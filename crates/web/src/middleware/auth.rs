use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

/// Session token claims. `sub` is the canonical user key that owns every
/// stored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// HS256 keys derived from the configured session secret.
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            inner: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation: Validation::new(Algorithm::HS256),
            }),
        }
    }

    /// Sign a session token for `sub`, valid for `ttl`.
    pub fn issue(&self, sub: &str, ttl: Duration) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: sub.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.inner.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.inner.decoding, &self.inner.validation).map(|data| data.claims)
    }
}

/// The user acting on a request, resolved by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

pub async fn require_auth(
    State(keys): State<SessionKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(WebError::Unauthorized)?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        WebError::Unauthorized
    })?;

    if claims.sub.trim().is_empty() {
        tracing::warn!("Rejected session token without subject");
        return Err(WebError::Unauthorized);
    }

    req.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
    });

    Ok(next.run(req).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(WebError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify() {
        let keys = SessionKeys::new(b"test-secret");
        let token = keys.issue("user-1", Duration::hours(1)).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = SessionKeys::new(b"other")
            .issue("user-1", Duration::hours(1))
            .unwrap();
        assert!(SessionKeys::new(b"test-secret").verify(&token).is_err());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let keys = SessionKeys::new(b"test-secret");
        let token = keys.issue("user-1", Duration::hours(-2)).unwrap();
        assert!(keys.verify(&token).is_err());
    }
}
