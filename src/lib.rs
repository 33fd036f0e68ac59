#![forbid(unsafe_code)]
//! mailguard_lib — validation d'adresses e-mail pour l'authentification
//! (erreurs bloquantes + avertissements).

pub mod validator;
pub use validator::{
    Advisory,
    EmailInput,
    ResolvedOptions,
    ValidationMode,
    ValidationOptions,
    ValidationResult,
    Violation,
    extract_domain,
    is_disposable_domain,
    is_from_domain,
    is_valid_email,
    is_valid_email_with,
    normalize_email,
    validate_email,
    validate_email_with,
};

#[cfg(feature = "with-serde")]
pub mod claims;
#[cfg(feature = "with-serde")]
pub use claims::{Audience, ClaimsError, JwtPayload, KeycloakToken, RoleSet};
