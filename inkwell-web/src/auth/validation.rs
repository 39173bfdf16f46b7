//! Client-side form validation.
//!
//! Runs before any network call; a failing field short-circuits the
//! submit and surfaces a notice, so invalid input never leaves the
//! browser.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.%+-]+@([\w-]+\.)+[\w-]{2,4}$").expect("email pattern"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w{2,}").expect("name pattern"));

/// Minimum password length accepted at registration.
const PASSWORD_MIN_LEN: usize = 10;

/// Validation failures a form can surface.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    InvalidEmail,
    FirstNameTooShort,
    LastNameTooShort,
    /// Login-only rule: anything shorter than a name-length password is
    /// rejected without asking the server.
    PasswordTooShort,
    /// Registration rule: length plus required character classes.
    PasswordTooWeak,
    PasswordsDoNotMatch,
}

impl ValidationError {
    /// User-facing notice for this failure.
    pub fn notice(self) -> &'static str {
        match self {
            Self::InvalidEmail => "Invalid email",
            Self::FirstNameTooShort => "First name must have at least two characters",
            Self::LastNameTooShort => "Last name must have at least two characters",
            Self::PasswordTooShort => "Password must be longer than two characters",
            Self::PasswordTooWeak => {
                "Password must have at least 10 characters, one special character, \
                 one capital letter and one number"
            }
            Self::PasswordsDoNotMatch => "Passwords do not match",
        }
    }
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validate a login form. The password only has to look like a
/// password here; the server decides whether it is right.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if !NAME_RE.is_match(password) {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a first/last name pair.
pub fn validate_names(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    if !NAME_RE.is_match(first_name) {
        return Err(ValidationError::FirstNameTooShort);
    }
    if !NAME_RE.is_match(last_name) {
        return Err(ValidationError::LastNameTooShort);
    }
    Ok(())
}

/// Validate a new password and its confirmation.
pub fn validate_password_change(
    new_password: &str,
    verification: &str,
) -> Result<(), ValidationError> {
    validate_password_strength(new_password)?;
    if new_password != verification {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Validate a registration form field set.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    verification: &str,
) -> Result<(), ValidationError> {
    validate_names(first_name, last_name)?;
    validate_email(email)?;
    validate_password_change(password, verification)
}

/// Validate password strength: at least [`PASSWORD_MIN_LEN`] characters
/// with a lowercase letter, an uppercase letter, a digit and a special
/// character.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| c.is_ascii_punctuation());

    if long_enough && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooWeak)
    }
}
