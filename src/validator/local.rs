use super::error::Violation;

/// RFC 5321 local-part limit.
pub(crate) const MAX_LOCAL_LENGTH: usize = 64;

/// Checks on the part before the first '@'.
pub(crate) fn check_local(local: &str, errors: &mut Vec<Violation>) {
    if local.is_empty() {
        errors.push(Violation::EmptyLocal);
    }
    if local.chars().count() > MAX_LOCAL_LENGTH {
        errors.push(Violation::LocalTooLong);
    }
}

/// Dot at either end of the address, or at either end of the local part.
pub(crate) fn has_edge_dot(email: &str) -> bool {
    let dotted = |s: &str| s.starts_with('.') || s.ends_with('.');
    dotted(email) || email.split_once('@').is_some_and(|(local, _)| dotted(local))
}
