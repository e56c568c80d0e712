//! Email field

use crate::field::{FieldError, FieldResult};
use grappelli_validators::{EmailValidator, Validator};

/// Email field with presence and format validation.
///
/// Two rules, checked in order: the value must be non-empty, and it must
/// parse as an email address. The first failing rule wins, so an empty
/// value reports the "required" message, never the "invalid" one.
///
/// # Examples
///
/// ```
/// use grappelli_forms::EmailField;
///
/// let field = EmailField::new();
/// assert!(field.validate("user@example.com").is_ok());
/// assert!(field.validate("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailField {
	required_message: String,
	invalid_message: String,
}

impl EmailField {
	/// Creates a new `EmailField` with the default messages.
	pub fn new() -> Self {
		Self {
			required_message: "Email is required".to_string(),
			invalid_message: "Invalid email".to_string(),
		}
	}

	/// Sets the message reported for an empty value.
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = message.into();
		self
	}

	/// Sets the message reported for a malformed value.
	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = message.into();
		self
	}

	/// Validates the given value.
	///
	/// Returns `Ok(())` when the value is a well-formed email address, or
	/// a [`FieldError::Validation`] carrying the first failing rule's
	/// message.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::EmailField;
	///
	/// let field = EmailField::new();
	/// assert!(field.validate("a@b.co").is_ok());
	/// assert!(field.validate("a@b").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() {
			return Err(FieldError::Validation(self.required_message.clone()));
		}
		if EmailValidator::new().validate(value).is_err() {
			return Err(FieldError::Validation(self.invalid_message.clone()));
		}
		Ok(())
	}
}

impl Default for EmailField {
	fn default() -> Self {
		Self::new()
	}
}
