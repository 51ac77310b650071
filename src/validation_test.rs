use super::*;

fn check(email: &str, password: &str) -> ValidationErrors {
    validate_credentials(&Credentials::new(email, password))
}

// =============================================================================
// email
// =============================================================================

#[test]
fn empty_email_is_required() {
    let errors = check("", "pw");
    assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.len(), 1);
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["plain", "a@b", "@b.co", "a@.co", "a@b.", "a b@c d", "   "] {
        let errors = check(email, "pw");
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID), "expected rejection for {email:?}");
    }
}

#[test]
fn plausible_emails_are_accepted() {
    for email in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org", "ü@exämple.de"] {
        assert!(check(email, "pw").is_empty(), "expected acceptance for {email:?}");
    }
}

#[test]
fn pattern_matches_anywhere_in_the_input() {
    assert!(is_plausible_email("  leading a@b.co trailing  "));
    assert!(is_plausible_email("a@b@c.d"));
    assert!(is_plausible_email("a@b..c"));
}

#[test]
fn whitespace_follows_the_ecmascript_set() {
    // BOM and no-break space separate runs; NEL does not.
    assert!(!is_plausible_email("a@b.\u{FEFF}"));
    assert!(!is_plausible_email("a@b.\u{00A0}"));
    assert!(!is_plausible_email("a\u{3000}@b.co"));
    assert!(is_plausible_email("a@b.\u{0085}"));
    assert!(is_plausible_email("a\u{0085}@b.co"));
}

// =============================================================================
// password
// =============================================================================

#[test]
fn empty_password_is_required() {
    let errors = check("a@b.co", "");
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(errors.get(Field::Email), None);
}

#[test]
fn whitespace_password_counts_as_present() {
    assert!(check("a@b.co", "   ").is_empty());
}

// =============================================================================
// accumulation
// =============================================================================

#[test]
fn both_fields_are_always_checked() {
    let errors = check("", "");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));

    let errors = check("nope", "");
    assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
}

#[test]
fn iter_yields_fields_in_display_order() {
    let errors = check("", "");
    let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
}
