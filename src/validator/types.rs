use super::error::{Advisory, Violation};

/// Candidate as handed over by the caller, before any check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailInput<'a> {
    Absent,
    Text(&'a str),
    /// Anything that is not textual (number, bool, object...).
    NotText,
}

impl<'a> From<&'a str> for EmailInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for EmailInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl<'a> From<Option<&'a str>> for EmailInput<'a> {
    fn from(opt: Option<&'a str>) -> Self {
        match opt {
            Some(s) => Self::Text(s),
            None => Self::Absent,
        }
    }
}

#[cfg(feature = "with-serde")]
impl<'a> From<&'a serde_json::Value> for EmailInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            serde_json::Value::String(s) => Self::Text(s.as_str()),
            _ => Self::NotText,
        }
    }
}

/// Format strategy, picked once per call from `allow_international`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// ASCII local part + LDH domain labels.
    Strict,
    /// "something@something.something" without whitespace.
    International,
}

pub(crate) const DEFAULT_ALLOW_INTERNATIONAL: bool = true;
pub(crate) const DEFAULT_ALLOW_DISPLAY_NAME: bool = false;
pub(crate) const DEFAULT_REQUIRE_TLD: bool = true;
/// RFC 5321 limit.
pub(crate) const DEFAULT_MAX_LENGTH: usize = 254;

/// Caller-side options. Each `None` falls back to the built-in default when
/// merged; note the built-in default for `allow_international` is `true`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "with-serde",
    serde(rename_all = "camelCase", default, deny_unknown_fields)
)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub allow_international: Option<bool>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub allow_display_name: Option<bool>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub require_tld: Option<bool>,
    /// Counted in `char`s (Unicode scalar values), not bytes or UTF-16 units.
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_length: Option<usize>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// What [`validate_email`](crate::validate_email) uses when the caller
    /// passes no options at all: strict format, other fields at their defaults.
    pub fn omitted() -> Self {
        Self::default().allow_international(false)
    }

    pub fn allow_international(mut self, value: bool) -> Self {
        self.allow_international = Some(value);
        self
    }

    pub fn allow_display_name(mut self, value: bool) -> Self {
        self.allow_display_name = Some(value);
        self
    }

    pub fn require_tld(mut self, value: bool) -> Self {
        self.require_tld = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn overlay(self, other: &ValidationOptions) -> Self {
        Self {
            allow_international: other.allow_international.or(self.allow_international),
            allow_display_name: other.allow_display_name.or(self.allow_display_name),
            require_tld: other.require_tld.or(self.require_tld),
            max_length: other.max_length.or(self.max_length),
        }
    }

    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            allow_international: self
                .allow_international
                .unwrap_or(DEFAULT_ALLOW_INTERNATIONAL),
            allow_display_name: self
                .allow_display_name
                .unwrap_or(DEFAULT_ALLOW_DISPLAY_NAME),
            require_tld: self.require_tld.unwrap_or(DEFAULT_REQUIRE_TLD),
            max_length: self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
        }
    }
}

/// Options after merging over the built-in defaults.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub allow_international: bool,
    pub allow_display_name: bool,
    pub require_tld: bool,
    /// In `char`s.
    pub max_length: usize,
}

impl ResolvedOptions {
    pub fn mode(&self) -> ValidationMode {
        if self.allow_international {
            ValidationMode::International
        } else {
            ValidationMode::Strict
        }
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        ValidationOptions::default().resolve()
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Advisory>,
}

impl ValidationResult {
    pub(crate) fn new(errors: Vec<Violation>, warnings: Vec<Advisory>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub(crate) fn rejected(violation: Violation) -> Self {
        Self::new(vec![violation], Vec::new())
    }

    pub fn has_error(&self, kind: &str) -> bool {
        self.errors.iter().any(|v| v.kind() == kind)
    }

    pub fn has_warning(&self, kind: &str) -> bool {
        self.warnings.iter().any(|a| a.kind() == kind)
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}
