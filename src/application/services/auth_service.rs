//! Bearer token check for the cache-control endpoints.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Verifies the admin bearer token.
///
/// Only the SHA-256 digest of the configured token is kept. Presented tokens
/// are hashed before comparison, so the comparison time does not depend on
/// how much of the token matched.
///
/// Without a configured token every request is rejected.
pub struct AuthService {
    token_digest: Option<[u8; 32]>,
}

impl AuthService {
    /// Creates the service from the configured `ADMIN_TOKEN`, if any.
    pub fn new(admin_token: Option<&str>) -> Self {
        Self {
            token_digest: admin_token.map(digest),
        }
    }

    /// Whether cache control is enabled at all.
    pub fn is_enabled(&self) -> bool {
        self.token_digest.is_some()
    }

    /// Checks a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no token is configured or the
    /// token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let Some(expected) = &self.token_digest else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Cache control is disabled"}),
            ));
        };

        if digest(token) != *expected {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid token"}),
            ));
        }

        Ok(())
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "test-admin-token-0123";

    #[test]
    fn test_authenticate_valid_token() {
        let service = AuthService::new(Some(TOKEN));
        assert!(service.is_enabled());
        assert!(service.authenticate(TOKEN).is_ok());
    }

    #[test]
    fn test_authenticate_wrong_token() {
        let service = AuthService::new(Some(TOKEN));
        let err = service.authenticate("test-admin-token-0124").unwrap_err();
        assert_eq!(err.code(), "unauthorized");
        assert!(service.authenticate("").is_err());
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let service = AuthService::new(None);
        assert!(!service.is_enabled());
        assert!(service.authenticate(TOKEN).is_err());
        assert!(service.authenticate("").is_err());
    }
}
