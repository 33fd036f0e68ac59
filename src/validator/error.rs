use thiserror::Error;

/// A rule the candidate address broke. `Display` gives the user-facing message.
#[cfg_attr(
    feature = "with-serde",
    derive(serde::Serialize),
    serde(into = "String")
)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Email is required")]
    Required,
    #[error("Email must be a string")]
    NotAString,
    #[error("Email cannot be empty")]
    Empty,
    #[error("Email cannot exceed {max_length} characters")]
    TooLong { max_length: usize },
    #[error("Invalid email format")]
    InvalidFormat,
    #[error("Email cannot contain consecutive dots")]
    ConsecutiveDots,
    #[error("Email cannot start or end with a dot")]
    EdgeDot,
    #[error("Email must contain exactly one @ symbol")]
    MultipleAt,
    #[error("Email local part cannot be empty")]
    EmptyLocal,
    #[error("Email local part cannot exceed 64 characters")]
    LocalTooLong,
    #[error("Email domain cannot be empty")]
    EmptyDomain,
    #[error("Email must include a top-level domain")]
    MissingTld,
    #[error("Display names are not allowed")]
    DisplayNameForbidden,
}

impl Violation {
    /// Stable code, independent of the message wording.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::NotAString => "not-a-string",
            Self::Empty => "empty",
            Self::TooLong { .. } => "too-long",
            Self::InvalidFormat => "bad-format",
            Self::ConsecutiveDots => "consecutive-dots",
            Self::EdgeDot => "edge-dot",
            Self::MultipleAt => "multiple-at",
            Self::EmptyLocal => "empty-local",
            Self::LocalTooLong => "local-too-long",
            Self::EmptyDomain => "empty-domain",
            Self::MissingTld => "missing-tld",
            Self::DisplayNameForbidden => "display-name-forbidden",
        }
    }
}

impl From<Violation> for String {
    fn from(v: Violation) -> Self {
        v.to_string()
    }
}

/// Advisory finding: reported, never invalidating.
#[cfg_attr(
    feature = "with-serde",
    derive(serde::Serialize),
    serde(into = "String")
)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    #[error("Disposable email address detected")]
    DisposableDomain,
}

impl Advisory {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DisposableDomain => "disposable-domain",
        }
    }
}

impl From<Advisory> for String {
    fn from(a: Advisory) -> Self {
        a.to_string()
    }
}
