use std::sync::OnceLock;

use regex::Regex;

use super::types::ValidationMode;

/// atext ASCII pour la partie locale, labels LDH (max 63) côté domaine.
const STRICT_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

const INTERNATIONAL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn strict_regex() -> &'static Regex {
    static INSTANCE: OnceLock<Regex> = OnceLock::new();
    INSTANCE.get_or_init(|| Regex::new(STRICT_PATTERN).expect("strict pattern compiles"))
}

fn international_regex() -> &'static Regex {
    static INSTANCE: OnceLock<Regex> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        Regex::new(INTERNATIONAL_PATTERN).expect("international pattern compiles")
    })
}

impl ValidationMode {
    pub(crate) fn pattern(self) -> &'static Regex {
        match self {
            Self::Strict => strict_regex(),
            Self::International => international_regex(),
        }
    }

    pub fn matches(self, email: &str) -> bool {
        self.pattern().is_match(email)
    }
}
