//! Email address validator

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// Email address pattern.
//
// Validates addresses with:
// - A non-empty local part of the usual atom characters
// - A domain of valid labels (no leading/trailing hyphens)
// - At least one dot in the domain, with an alphabetic final label
//   of two or more characters
//
// This deliberately rejects dotless domains ("user@localhost") and
// single-letter TLDs ("a@b.c"), matching what mobile sign-up forms
// accept in practice.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string value is a well-formed email address.
///
/// # Examples
///
/// ```
/// use grappelli_validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("a@b").is_err());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator;

impl EmailValidator {
	/// Creates a new `EmailValidator`.
	pub fn new() -> Self {
		Self
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidEmail)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user@example.com")]
	#[case("a@b.co")]
	#[case("first.last@example.com")]
	#[case("user+tag@example.com")]
	#[case("user_name@sub.example.com")]
	#[case("u@valid-domain.org")]
	#[case("digits123@example.io")]
	fn test_email_validator_valid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_ok(), "Expected '{email}' to be a valid email");
	}

	#[rstest]
	#[case("")]
	#[case("abc")]
	#[case("a@b")]
	#[case("a@b.c")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@@example.com")]
	#[case("user@-example.com")]
	#[case("user@example-.com")]
	#[case("user@example.123")]
	#[case("has space@example.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_err(), "Expected '{email}' to be an invalid email");
	}

	#[rstest]
	fn test_email_validator_error_type() {
		let validator = EmailValidator::new();
		assert_eq!(
			validator.validate("not-an-email"),
			Err(ValidationError::InvalidEmail)
		);
	}
}
