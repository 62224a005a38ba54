use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;

use crate::models::user::SignupForm;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]+$").expect("name pattern is a valid regex")
});

/// Every way a signup can be turned away. The `Display` text is what the
/// browser sees as the flash message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("First name must be at least 3 characters long, contain only letters, and start with a capital letter.")]
    InvalidFirstName,
    #[error("Last name must be at least 3 characters long, contain only letters, and start with a capital letter.")]
    InvalidLastName,
    // The accepted range is 0..=99 while the text says 1..=99.
    #[error("Number must be between 1 and 99.")]
    NumberOutOfRange,
    #[error("Password must be at least 3 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Email already exists.")]
    EmailTaken,
    #[error("Number is already taken. Please choose a different number between 1 and 99.")]
    NumberTaken,
}

/// Stateless signup rules. Uniqueness of email and number is checked by the
/// handler against the database after these pass.
pub struct SignupValidator;

impl SignupValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run the form-only rules in order and hand back the parsed jersey number.
    pub fn validate(&self, form: &SignupForm) -> Result<i32, SignupError> {
        if !self.is_valid_name(&form.first_name) {
            return Err(SignupError::InvalidFirstName);
        }
        if !self.is_valid_name(&form.last_name) {
            return Err(SignupError::InvalidLastName);
        }
        let number = self.validate_number(&form.number)?;
        self.validate_password(
            form.password.expose_secret(),
            form.confirm_password.expose_secret(),
        )?;
        Ok(number)
    }

    /// At least three characters, one capital then lowercase letters only.
    pub fn is_valid_name(&self, name: &str) -> bool {
        name.chars().count() >= 3 && NAME_PATTERN.is_match(name)
    }

    pub fn validate_number(&self, raw: &str) -> Result<i32, SignupError> {
        match raw.trim().parse::<i32>() {
            Ok(number) if (0..=99).contains(&number) => Ok(number),
            _ => Err(SignupError::NumberOutOfRange),
        }
    }

    pub fn validate_password(&self, password: &str, confirmation: &str) -> Result<(), SignupError> {
        if password.chars().count() < 3 {
            return Err(SignupError::PasswordTooShort);
        }
        if password != confirmation {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }
}

impl Default for SignupValidator {
    fn default() -> Self {
        Self::new()
    }
}
