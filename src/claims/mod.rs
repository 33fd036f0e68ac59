//! Typed token claims (feature `with-serde`).
//!
//! Known claims are plain fields; unknown ones are kept in
//! [`JwtPayload::additional`] instead of being reached through dynamic access.
//! [`KeycloakToken::validate_email_claim`] runs the `email` claim through the
//! validator.

mod error;
mod types;

pub use error::ClaimsError;
pub use types::{Audience, JwtPayload, KeycloakToken, RoleSet};

use crate::validator::{ValidationOptions, ValidationResult, normalize_email, validate_email_with};

impl KeycloakToken {
    pub fn from_json(payload: &str) -> Result<Self, ClaimsError> {
        let value: serde_json::Value = serde_json::from_str(payload).map_err(ClaimsError::json)?;
        if !value.is_object() {
            return Err(ClaimsError::NotAnObject);
        }
        serde_json::from_value(value).map_err(ClaimsError::json)
    }

    /// A missing `email` claim is reported as "Email is required".
    pub fn validate_email_claim(&self, options: &ValidationOptions) -> ValidationResult {
        validate_email_with(self.email.as_deref(), options)
    }

    pub fn normalized_email(&self) -> String {
        normalize_email(self.email.as_deref())
    }

    pub fn has_realm_role(&self, role: &str) -> bool {
        self.realm_access.as_ref().is_some_and(|r| r.contains(role))
    }

    pub fn has_client_role(&self, client: &str, role: &str) -> bool {
        self.resource_access
            .get(client)
            .is_some_and(|r| r.contains(role))
    }

    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.jwt.is_expired_at(now_unix)
    }
}
