//! Validation error types

/// Result type for validator operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors produced by validators.
///
/// Carries the data a caller needs to render its own message; the
/// `Display` implementation provides a generic fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("This field is required")]
	Required,
	#[error("Value is too short: {length} characters (minimum {min})")]
	TooShort { length: usize, min: usize },
	#[error("Value must contain an uppercase letter")]
	MissingUppercase,
	#[error("Value must contain a lowercase letter")]
	MissingLowercase,
	#[error("Value must contain a digit")]
	MissingDigit,
	#[error("Enter a valid email address")]
	InvalidEmail,
	#[error("{0}")]
	Custom(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_messages() {
		assert_eq!(
			ValidationError::Required.to_string(),
			"This field is required"
		);
		assert_eq!(
			ValidationError::TooShort { length: 2, min: 8 }.to_string(),
			"Value is too short: 2 characters (minimum 8)"
		);
		assert_eq!(
			ValidationError::Custom("No good".to_string()).to_string(),
			"No good"
		);
	}
}
