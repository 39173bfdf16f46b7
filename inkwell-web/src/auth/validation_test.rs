use super::*;

#[test]
fn accepts_ordinary_emails() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("first.last@sub.domain.org").is_ok());
    assert!(validate_email("tagged+inbox@example.io").is_ok());
}

#[test]
fn rejects_malformed_emails() {
    assert_eq!(
        validate_email("userexample.com"),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(validate_email("user@"), Err(ValidationError::InvalidEmail));
    assert_eq!(
        validate_email("@example.com"),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
}

#[test]
fn login_checks_email_first() {
    assert_eq!(
        validate_login("not-an-email", "whatever-password"),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn login_rejects_trivial_password() {
    assert_eq!(
        validate_login("user@example.com", "a"),
        Err(ValidationError::PasswordTooShort)
    );
    assert!(validate_login("user@example.com", "correct horse").is_ok());
}

/// The registration strength rule: ten characters, lower, upper, digit,
/// special. "abc" fails long before any network call happens.
#[test]
fn registration_password_strength() {
    assert_eq!(
        validate_password_strength("abc"),
        Err(ValidationError::PasswordTooWeak)
    );
    // Long enough but missing character classes.
    assert_eq!(
        validate_password_strength("alllowercase"),
        Err(ValidationError::PasswordTooWeak)
    );
    assert_eq!(
        validate_password_strength("NoDigitsHere!"),
        Err(ValidationError::PasswordTooWeak)
    );
    assert_eq!(
        validate_password_strength("N0Special1s"),
        Err(ValidationError::PasswordTooWeak)
    );
    // Nine characters with every class is still too short.
    assert_eq!(
        validate_password_strength("Aa1!aaaa0"),
        Err(ValidationError::PasswordTooWeak)
    );

    assert!(validate_password_strength("Str0ng&Longer").is_ok());
}

#[test]
fn registration_field_order() {
    assert_eq!(
        validate_registration("A", "Lovelace", "ada@example.com", "Str0ng&Longer", "Str0ng&Longer"),
        Err(ValidationError::FirstNameTooShort)
    );
    assert_eq!(
        validate_registration("Ada", "L", "ada@example.com", "Str0ng&Longer", "Str0ng&Longer"),
        Err(ValidationError::LastNameTooShort)
    );
    assert_eq!(
        validate_registration("Ada", "Lovelace", "ada@", "Str0ng&Longer", "Str0ng&Longer"),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(
        validate_registration("Ada", "Lovelace", "ada@example.com", "Str0ng&Longer", "different"),
        Err(ValidationError::PasswordsDoNotMatch)
    );
    assert!(
        validate_registration(
            "Ada",
            "Lovelace",
            "ada@example.com",
            "Str0ng&Longer",
            "Str0ng&Longer"
        )
        .is_ok()
    );
}

#[test]
fn notices_are_user_facing() {
    assert_eq!(ValidationError::InvalidEmail.notice(), "Invalid email");
    assert!(
        ValidationError::PasswordTooWeak
            .notice()
            .contains("at least 10 characters")
    );
}
