//! String validators

use crate::{ValidationError, ValidationResult, Validator};

/// Presence validator
///
/// Rejects empty strings. Whitespace-only values are accepted: the
/// engine never normalizes input, so a value of `" "` counts as present.
pub struct RequiredValidator;

impl RequiredValidator {
	/// Creates a new RequiredValidator.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_validators::{RequiredValidator, Validator};
	///
	/// let validator = RequiredValidator::new();
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("").is_err());
	/// ```
	pub fn new() -> Self {
		Self
	}
}

impl Default for RequiredValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for RequiredValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() {
			Err(ValidationError::Required)
		} else {
			Ok(())
		}
	}
}

/// Minimum length validator
///
/// Length is counted in characters, not bytes.
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	/// Creates a new MinLengthValidator with the specified minimum length.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_validators::{MinLengthValidator, Validator};
	///
	/// let validator = MinLengthValidator::new(5);
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("hi").is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Validator<str> for MinLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length >= self.min {
			Ok(())
		} else {
			Err(ValidationError::TooShort {
				length,
				min: self.min,
			})
		}
	}
}
