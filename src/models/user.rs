//! User model and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User account, used only for authentication and loan ownership here;
/// account administration is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_exp(exp: i64) -> UserClaims {
        UserClaims {
            sub: "alice".to_string(),
            user_id: 1,
            exp,
            iat: Utc::now().timestamp(),
        }
    }

    #[test]
    fn token_round_trip() {
        let claims = claims_with_exp(Utc::now().timestamp() + 3600);
        let token = claims.create_token("secret").unwrap();
        let parsed = UserClaims::from_token(&token, "secret").unwrap();
        assert_eq!(parsed.sub, "alice");
        assert_eq!(parsed.user_id, 1);
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = claims_with_exp(Utc::now().timestamp() - 7200);
        let token = claims.create_token("secret").unwrap();
        assert!(UserClaims::from_token(&token, "secret").is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = claims_with_exp(Utc::now().timestamp() + 3600);
        let token = claims.create_token("secret").unwrap();
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }
}
