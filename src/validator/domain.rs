use phf::phf_set;

use super::error::{Advisory, Violation};
use super::types::ResolvedOptions;

/// Domaines jetables connus (minuscules, correspondance exacte).
static DISPOSABLE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "10minutemail.com",
    "tempmail.org",
    "guerrillamail.com",
    "mailinator.com",
};

pub fn is_disposable_domain(domain: &str) -> bool {
    DISPOSABLE_DOMAINS.contains(normalize_domain(domain).as_str())
}

pub(crate) fn normalize_domain(domain: &str) -> String {
    domain.to_lowercase()
}

/// Checks on everything after the first '@'. Invalidating findings go to
/// `errors`, advisory ones to `warnings`.
pub(crate) fn check_domain(
    domain: &str,
    opts: &ResolvedOptions,
    errors: &mut Vec<Violation>,
    warnings: &mut Vec<Advisory>,
) {
    if domain.is_empty() {
        errors.push(Violation::EmptyDomain);
    }

    // TLD approximé : au moins un point
    if opts.require_tld && !domain.contains('.') {
        errors.push(Violation::MissingTld);
    }

    if is_disposable_domain(domain) {
        warnings.push(Advisory::DisposableDomain);
    }
}
