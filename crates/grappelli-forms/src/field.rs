//! Field-level error types

/// Error produced when a field value fails validation.
///
/// Validation failure is an expected outcome, not an exceptional one:
/// these errors are collected into the form's error mapping and rendered
/// inline next to the offending field, never propagated as a failure of
/// the validation call itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// The user-facing message carried by this error.
	pub fn message(&self) -> &str {
		match self {
			FieldError::Validation(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;
