use proptest::prelude::*;

use super::*;

fn messages(result: &ValidationResult) -> Vec<String> {
    result.error_messages()
}

#[test]
fn accepts_common_addresses() {
    let valid = [
        "test@example.com",
        "user.name@example.com",
        "user+tag@example.com",
        "user123@example.org",
        "test.email.with+symbol@example.com",
        "simple@example.co.uk",
        "very.common@example.com",
        "x@example.com",
        "long.email-address-with-hyphens@and.subdomains.example.com",
        "john.doe@company.com",
        "jane.smith+notifications@bigcorp.org",
        "developer@startup.io",
    ];
    for email in valid {
        let r = validate_email(email);
        assert!(r.is_valid, "{email}: {:?}", r.errors);
        assert!(r.errors.is_empty());
    }
}

#[test]
fn rejects_with_expected_message() {
    let cases = [
        ("", "Email cannot be empty"),
        ("plainaddress", "Invalid email format"),
        ("@example.com", "Email local part cannot be empty"),
        ("test@", "Email domain cannot be empty"),
        ("test..test@example.com", "Email cannot contain consecutive dots"),
        (".test@example.com", "Email cannot start or end with a dot"),
        ("test.@example.com", "Email cannot start or end with a dot"),
        ("test@example@com", "Email must contain exactly one @ symbol"),
    ];
    for (email, expected) in cases {
        let r = validate_email(email);
        assert!(!r.is_valid, "{email} should be invalid");
        assert!(
            messages(&r).iter().any(|m| m == expected),
            "{email}: {:?}",
            r.errors
        );
    }
}

#[test]
fn absent_input_short_circuits() {
    let r = validate_email(None::<&str>);
    assert!(!r.is_valid);
    assert_eq!(r.errors, vec![Violation::Required]);
    assert!(r.warnings.is_empty());

    let r = validate_email_with(EmailInput::Absent, &ValidationOptions::new());
    assert_eq!(messages(&r), vec!["Email is required".to_string()]);
}

#[test]
fn non_text_input_short_circuits() {
    let r = validate_email(EmailInput::NotText);
    assert!(!r.is_valid);
    assert_eq!(messages(&r), vec!["Email must be a string".to_string()]);
    assert!(r.warnings.is_empty());
}

#[cfg(feature = "with-serde")]
#[test]
fn json_number_is_not_a_string() {
    let value = serde_json::json!(42);
    let r = validate_email(&value);
    assert_eq!(r.errors, vec![Violation::NotAString]);
    let r = validate_email(&serde_json::Value::Null);
    assert_eq!(r.errors, vec![Violation::Required]);
}

#[test]
fn trims_before_checking() {
    let r = validate_email("  test@example.com  ");
    assert!(r.is_valid, "{:?}", r.errors);
}

#[test]
fn empty_string_runs_every_check() {
    let r = validate_email("   ");
    assert_eq!(r.errors, vec![Violation::Empty, Violation::InvalidFormat]);
}

#[test]
fn max_length_option() {
    let long = format!("{}@example.com", "a".repeat(250));
    let opts = ValidationOptions::new()
        .allow_international(false)
        .max_length(50);
    let r = validate_email_with(long.as_str(), &opts);
    assert!(!r.is_valid);
    assert!(messages(&r).contains(&"Email cannot exceed 50 characters".to_string()));
    // local part > 64 aussi
    assert!(r.has_error("local-too-long"));
}

#[test]
fn default_max_length_is_254() {
    let at_limit = format!("{}@{}.com", "a".repeat(60), "b".repeat(189));
    assert_eq!(at_limit.len(), 254);
    let r = validate_email(at_limit.as_str());
    assert!(!r.has_error("too-long"), "{:?}", r.errors);

    let over = format!("{}@{}.com", "a".repeat(60), "b".repeat(190));
    let r = validate_email(over.as_str());
    assert!(r.errors.contains(&Violation::TooLong { max_length: 254 }));
}

#[test]
fn max_length_counts_chars() {
    // 8 chars, 11 UTF-16 units, 17 bytes
    let email = "😀😀😀@a.co";
    let opts = ValidationOptions::new().max_length(8);
    let r = validate_email_with(email, &opts);
    assert!(r.is_valid, "{:?}", r.errors);

    let r = validate_email_with(email, &ValidationOptions::new().max_length(7));
    assert_eq!(r.errors, vec![Violation::TooLong { max_length: 7 }]);
}

#[test]
fn several_checks_fire_together() {
    let opts = ValidationOptions::omitted().max_length(10);
    let r = validate_email_with("not an email", &opts);
    assert_eq!(
        r.errors,
        vec![Violation::TooLong { max_length: 10 }, Violation::InvalidFormat]
    );
}

#[test]
fn requires_tld_by_default() {
    let r = validate_email("test@localhost");
    assert!(!r.is_valid);
    assert!(messages(&r).contains(&"Email must include a top-level domain".to_string()));
}

#[test]
fn tld_can_be_optional() {
    let opts = ValidationOptions::new()
        .allow_international(false)
        .require_tld(false);
    let r = validate_email_with("test@localhost", &opts);
    assert!(r.is_valid, "{:?}", r.errors);
}

#[test]
fn disposable_domain_only_warns() {
    let r = validate_email("test@10minutemail.com");
    assert!(r.is_valid, "{:?}", r.errors);
    assert_eq!(
        r.warning_messages(),
        vec!["Disposable email address detected".to_string()]
    );

    let r = validate_email("test@MAILINATOR.com");
    assert!(r.has_warning("disposable-domain"));
}

#[test]
fn regular_domain_has_no_warning() {
    let r = validate_email("test@example.com");
    assert!(r.warnings.is_empty());
}

#[test]
fn display_name_rejected_unless_allowed() {
    let r = validate_email("Jane <jane@example.com>");
    assert!(r.has_error("display-name-forbidden"), "{:?}", r.errors);
    assert!(r.has_error("bad-format"));

    let opts = ValidationOptions::omitted().allow_display_name(true);
    let r = validate_email_with("Jane <jane@example.com>", &opts);
    assert!(!r.has_error("display-name-forbidden"));
    // le format strict refuse toujours
    assert!(!r.is_valid);
}

#[test]
fn display_name_needs_an_at_sign() {
    let r = validate_email("Jane <jane>");
    assert!(!r.has_error("display-name-forbidden"));
}

#[test]
fn omitted_options_are_strict_empty_options_are_international() {
    let email = "pelé@exämple.com";
    assert!(!validate_email(email).is_valid);
    assert!(validate_email_with(email, &ValidationOptions::new()).is_valid);
    assert!(validate_email_with(email, &ValidationOptions::omitted().allow_international(true)).is_valid);
}

#[test]
fn international_mode_still_requires_a_dot() {
    let r = validate_email_with("user@localhost", &ValidationOptions::new());
    assert_eq!(r.errors, vec![Violation::InvalidFormat, Violation::MissingTld]);
}

#[test]
fn multiple_at_splits_on_first() {
    let r = validate_email("test@example@com");
    assert_eq!(
        r.errors,
        vec![
            Violation::InvalidFormat,
            Violation::MultipleAt,
            Violation::MissingTld,
        ]
    );

    // "example@co.uk" est traité comme domaine : il contient un point
    let r = validate_email("test@example@co.uk");
    assert!(r.has_error("multiple-at"));
    assert!(!r.has_error("missing-tld"));
}

#[test]
fn error_order_follows_check_order() {
    let r = validate_email(".a..b@");
    assert_eq!(
        r.errors,
        vec![
            Violation::InvalidFormat,
            Violation::ConsecutiveDots,
            Violation::EdgeDot,
            Violation::EmptyDomain,
            Violation::MissingTld,
        ]
    );
}

#[test]
fn is_valid_helpers() {
    assert!(is_valid_email("test@example.com"));
    assert!(!is_valid_email("invalid-email"));
    assert!(is_valid_email_with(
        "test@localhost",
        &ValidationOptions::omitted().require_tld(false)
    ));
}

#[test]
fn extract_domain_lowercases() {
    assert_eq!(extract_domain("user@example.com").as_deref(), Some("example.com"));
    assert_eq!(
        extract_domain("test@subdomain.example.org").as_deref(),
        Some("subdomain.example.org")
    );
    assert_eq!(extract_domain("user@EXAMPLE.COM").as_deref(), Some("example.com"));
    assert_eq!(extract_domain("  user@Example.com ").as_deref(), Some("example.com"));
}

#[test]
fn extract_domain_none_cases() {
    assert_eq!(extract_domain("invalid-email"), None);
    assert_eq!(extract_domain(""), None);
    assert_eq!(extract_domain(None::<&str>), None);
    assert_eq!(extract_domain(EmailInput::NotText), None);
    assert_eq!(extract_domain("a@b@c.com"), None);
}

#[test]
fn is_from_domain_ignores_case() {
    assert!(is_from_domain("user@example.com", "example.com"));
    assert!(!is_from_domain("user@example.com", "other.com"));
    assert!(is_from_domain("user@EXAMPLE.COM", "example.com"));
    assert!(is_from_domain("user@example.com", "EXAMPLE.COM"));
    assert!(!is_from_domain(None::<&str>, "example.com"));
}

#[test]
fn normalize_for_storage() {
    assert_eq!(normalize_email("  USER@EXAMPLE.COM  "), "user@example.com");
    assert_eq!(normalize_email("Test.User@Example.Org"), "test.user@example.org");
    assert_eq!(normalize_email(None::<&str>), "");
    assert_eq!(normalize_email(EmailInput::NotText), "");
    assert_eq!(normalize_email(""), "");
}

#[test]
fn auth_flow_round_trip() {
    let email = "user@yourcompany.com";
    assert!(validate_email(email).is_valid);
    assert_eq!(extract_domain(email).as_deref(), Some("yourcompany.com"));
    assert_eq!(normalize_email(email), email);
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\s{0,3}[A-Za-z0-9.@+_ -]{0,40}\\s{0,3}") {
        let once = normalize_email(s.as_str());
        prop_assert_eq!(normalize_email(once.as_str()), once);
    }

    #[test]
    fn validity_matches_error_list(s in "[A-Za-z0-9.@<>+_ -]{0,80}", intl in any::<bool>()) {
        let opts = ValidationOptions::new().allow_international(intl);
        let r = validate_email_with(s.as_str(), &opts);
        prop_assert_eq!(r.is_valid, r.errors.is_empty());
    }

    #[test]
    fn accepted_addresses_have_a_domain(
        s in "[a-zA-Z0-9.+_-]{1,20}@[a-zA-Z0-9-]{1,15}(\\.[a-zA-Z]{2,6}){1,2}"
    ) {
        let r = validate_email(s.as_str());
        if r.is_valid {
            prop_assert!(extract_domain(s.as_str()).is_some());
        }
    }
}
