mod domain;
mod error;
mod format;
mod local;
mod types;

pub use domain::is_disposable_domain;
pub use error::{Advisory, Violation};
pub use types::{EmailInput, ResolvedOptions, ValidationMode, ValidationOptions, ValidationResult};

use domain::{check_domain, normalize_domain};
use local::{check_local, has_edge_dot};

/// Validates with the options a caller gets when passing none: strict format,
/// TLD required, 254 characters max, no display name.
pub fn validate_email<'a>(input: impl Into<EmailInput<'a>>) -> ValidationResult {
    validate_email_with(input, &ValidationOptions::omitted())
}

/// Validates `input` with `options` merged over the built-in defaults.
///
/// Every check runs, so a single call reports all the violations found. The
/// only early returns are for absent and non-textual input.
pub fn validate_email_with<'a>(
    input: impl Into<EmailInput<'a>>,
    options: &ValidationOptions,
) -> ValidationResult {
    let input: EmailInput<'a> = input.into();
    let raw = match input {
        EmailInput::Absent => return ValidationResult::rejected(Violation::Required),
        EmailInput::NotText => return ValidationResult::rejected(Violation::NotAString),
        EmailInput::Text(s) => s,
    };
    let opts = options.resolve();
    let mode = opts.mode();
    let email = raw.trim();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if email.is_empty() {
        errors.push(Violation::Empty);
    }

    if email.chars().count() > opts.max_length {
        errors.push(Violation::TooLong {
            max_length: opts.max_length,
        });
    }

    if !mode.matches(email) {
        errors.push(Violation::InvalidFormat);
    }

    if email.contains("..") {
        errors.push(Violation::ConsecutiveDots);
    }

    if has_edge_dot(email) {
        errors.push(Violation::EdgeDot);
    }

    if email.contains('@') && email.split('@').count() != 2 {
        errors.push(Violation::MultipleAt);
    }

    // coupe au premier '@' : un éventuel second '@' reste dans le domaine
    if let Some((local, domain)) = email.split_once('@') {
        check_local(local, &mut errors);
        check_domain(domain, &opts, &mut errors, &mut warnings);

        if !opts.allow_display_name && email.contains('<') {
            errors.push(Violation::DisplayNameForbidden);
        }
    }

    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        ?mode,
        errors = errors.len(),
        warnings = warnings.len(),
        "email validated"
    );

    ValidationResult::new(errors, warnings)
}

pub fn is_valid_email<'a>(input: impl Into<EmailInput<'a>>) -> bool {
    validate_email(input).is_valid
}

pub fn is_valid_email_with<'a>(
    input: impl Into<EmailInput<'a>>,
    options: &ValidationOptions,
) -> bool {
    validate_email_with(input, options).is_valid
}

/// Lower-cased domain, only when the trimmed input holds exactly one '@'.
pub fn extract_domain<'a>(input: impl Into<EmailInput<'a>>) -> Option<String> {
    let input: EmailInput<'a> = input.into();
    let EmailInput::Text(raw) = input else {
        return None;
    };
    let mut parts = raw.trim().split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(domain), None) => Some(normalize_domain(domain)),
        _ => None,
    }
}

pub fn is_from_domain<'a>(input: impl Into<EmailInput<'a>>, domain: &str) -> bool {
    extract_domain(input).is_some_and(|d| d == normalize_domain(domain))
}

/// Trimmed, lower-cased form for storage and comparison. Absent or non-text
/// input gives an empty string; no validation happens here.
pub fn normalize_email<'a>(input: impl Into<EmailInput<'a>>) -> String {
    let input: EmailInput<'a> = input.into();
    match input {
        EmailInput::Text(raw) => raw.trim().to_lowercase(),
        EmailInput::Absent | EmailInput::NotText => String::new(),
    }
}

#[cfg(test)]
mod tests;
