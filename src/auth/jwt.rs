use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::user;

/// JWT claims embedded in access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: numeric user ID as a string.
    pub sub: String,
    /// User type: `"professor"`, `"student"`, or `"super_admin"`.
    pub user_type: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued-at time (Unix timestamp).
    pub iat: i64,
    /// Unique JWT identifier.
    pub jti: String,
}

impl Claims {
    /// Parse the subject back into a user ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the subject is not numeric.
    pub fn user_id(&self) -> anyhow::Result<i32> {
        self.sub
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid token subject: {}", self.sub))
    }
}

/// Issue an access token for `user`, valid for `ttl_secs` seconds.
///
/// # Errors
///
/// Returns an error if JWT encoding fails.
pub fn generate_access_token(
    user: &user::Model,
    secret: &str,
    ttl_secs: u64,
) -> anyhow::Result<String> {
    let now = Utc::now();

    #[allow(clippy::cast_possible_wrap)]
    let exp = now.timestamp() + ttl_secs as i64;

    let claims = Claims {
        sub: user.id.to_string(),
        user_type: user.user_type.clone(),
        exp,
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &key)
        .map_err(|e| anyhow::anyhow!("Failed to encode access token: {e}"))
}

/// Validate an access token and return its claims.
///
/// # Errors
///
/// Returns an error if the token is invalid or expired.
pub fn validate_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)
        .map_err(|e| anyhow::anyhow!("Invalid access token: {e}"))?;

    Ok(token_data.claims)
}
