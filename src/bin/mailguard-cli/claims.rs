use anyhow::{Context, Result};

use mailguard_lib::{EmailInput, KeycloakToken, ValidationOptions};

use crate::output::{OutputRow, make_row};

/// Lit un payload Keycloak et valide son claim `email`.
pub fn run_claims(path: &str, options: &ValidationOptions) -> Result<OutputRow> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read claims {path}"))?;
    let token = KeycloakToken::from_json(&raw).with_context(|| format!("parse claims {path}"))?;

    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        user = %token.preferred_username,
        email_verified = ?token.email_verified,
        "claims loaded"
    );

    let input = EmailInput::from(token.email.as_deref());
    let original = token
        .email
        .clone()
        .unwrap_or_else(|| format!("<{}: no email claim>", token.preferred_username));
    Ok(make_row(original, input, options))
}
