//! Caller identity supplied by the external identity provider
//!
//! The server never issues tokens. It only checks the bearer token presented
//! with a request and extracts the subject, which is used for audit logging.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Verified caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque subject identifier assigned by the provider
    pub subject: String,
}

/// Capability turning a bearer token into a verified identity
#[cfg_attr(test, mockall::automock)]
pub trait IdentityVerifier: Send + Sync {
    fn verify(&self, token: &str) -> AppResult<Identity>;
}

/// Claims we rely on in provider tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderClaims {
    pub sub: String,
    pub exp: i64,
}

/// Verifies HS256 tokens signed with a shared secret
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

impl IdentityVerifier for JwtIdentityVerifier {
    fn verify(&self, token: &str) -> AppResult<Identity> {
        let data = decode::<ProviderClaims>(token, &self.key, &self.validation)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        if data.claims.sub.is_empty() {
            return Err(AppError::Authentication("Token has no subject".to_string()));
        }

        Ok(Identity {
            subject: data.claims.sub,
        })
    }
}
