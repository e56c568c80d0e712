//! Credentials form
//!
//! The validation engine behind the login / sign-up screen: given a mode
//! and a pair of field values, produce either the credentials unchanged
//! or a per-field error mapping. Validation is pure; the form holds
//! configuration (which policies apply), never input state.

use crate::email_field::EmailField;
use crate::policy::PasswordPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Index;

/// Field name key for email errors
pub const EMAIL_FIELD: &str = "email";
/// Field name key for password errors
pub const PASSWORD_FIELD: &str = "password";

/// Which rule set applies: login or sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
	Login,
	SignUp,
}

impl FormMode {
	/// The other mode; the screen's mode toggle flips through this.
	pub fn toggled(self) -> Self {
		match self {
			FormMode::Login => FormMode::SignUp,
			FormMode::SignUp => FormMode::Login,
		}
	}
}

/// The values a form session works on. Held only for the duration of one
/// session and never normalized: what the user typed is what gets
/// validated and what gets submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

impl Credentials {
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
		}
	}
}

/// Per-field error mapping: field name to a single message.
///
/// At most one message per field (the first failing rule wins), so a
/// full mapping has 0, 1, or 2 entries.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{CredentialsForm, Credentials, FormMode};
///
/// let form = CredentialsForm::new();
/// let outcome = form.validate(FormMode::Login, &Credentials::new("", "x"));
/// let errors = outcome.into_errors().unwrap();
/// assert_eq!(errors.email(), Some("Email is required"));
/// assert_eq!(errors.password(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
	errors: HashMap<String, String>,
}

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a message for a field, keeping the first one on conflict.
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.errors.entry(field.into()).or_insert_with(|| message.into());
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}

	/// The email field's message, if any.
	pub fn email(&self) -> Option<&str> {
		self.get(EMAIL_FIELD)
	}

	/// The password field's message, if any.
	pub fn password(&self) -> Option<&str> {
		self.get(PASSWORD_FIELD)
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl Index<&str> for FieldErrors {
	type Output = str;

	fn index(&self, field: &str) -> &Self::Output {
		self.get(field)
			.unwrap_or_else(|| panic!("No error recorded for field '{}'", field))
	}
}

/// Result of validating a [`Credentials`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
	/// Every rule passed; carries the input unchanged.
	Valid(Credentials),
	/// At least one field failed; carries the first message per field.
	Invalid(FieldErrors),
}

impl ValidationOutcome {
	pub fn is_valid(&self) -> bool {
		matches!(self, ValidationOutcome::Valid(_))
	}

	/// The error mapping, if validation failed.
	pub fn errors(&self) -> Option<&FieldErrors> {
		match self {
			ValidationOutcome::Valid(_) => None,
			ValidationOutcome::Invalid(errors) => Some(errors),
		}
	}

	/// Consumes the outcome, yielding the error mapping if any.
	pub fn into_errors(self) -> Option<FieldErrors> {
		match self {
			ValidationOutcome::Valid(_) => None,
			ValidationOutcome::Invalid(errors) => Some(errors),
		}
	}
}

/// The credentials form: an email field plus one password policy per
/// mode.
///
/// `validate` is a pure function of (configuration, mode, input); calling
/// it twice with the same input yields the same outcome, and no state is
/// written anywhere.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{Credentials, CredentialsForm, FormMode};
///
/// let form = CredentialsForm::new();
///
/// let good = Credentials::new("user@example.com", "Abcdefg1");
/// assert!(form.validate(FormMode::SignUp, &good).is_valid());
///
/// let weak = Credentials::new("user@example.com", "x");
/// assert!(form.validate(FormMode::Login, &weak).is_valid());
/// assert!(!form.validate(FormMode::SignUp, &weak).is_valid());
/// ```
#[derive(Debug)]
pub struct CredentialsForm {
	email_field: EmailField,
	login_policy: PasswordPolicy,
	sign_up_policy: PasswordPolicy,
}

impl CredentialsForm {
	/// Creates a form with the standard policies:
	/// [`PasswordPolicy::login`] and [`PasswordPolicy::sign_up`].
	pub fn new() -> Self {
		Self {
			email_field: EmailField::new(),
			login_policy: PasswordPolicy::login(),
			sign_up_policy: PasswordPolicy::sign_up(),
		}
	}

	/// Replaces the email field configuration.
	pub fn with_email_field(mut self, field: EmailField) -> Self {
		self.email_field = field;
		self
	}

	/// Replaces the policy applied in login mode.
	pub fn with_login_policy(mut self, policy: PasswordPolicy) -> Self {
		self.login_policy = policy;
		self
	}

	/// Replaces the policy applied in sign-up mode.
	pub fn with_sign_up_policy(mut self, policy: PasswordPolicy) -> Self {
		self.sign_up_policy = policy;
		self
	}

	/// Uses one policy for both modes, as the simpler of the two original
	/// screens does.
	pub fn with_uniform_policy(self, make: impl Fn() -> PasswordPolicy) -> Self {
		self.with_login_policy(make()).with_sign_up_policy(make())
	}

	fn policy(&self, mode: FormMode) -> &PasswordPolicy {
		match mode {
			FormMode::Login => &self.login_policy,
			FormMode::SignUp => &self.sign_up_policy,
		}
	}

	/// Validates the credentials under the given mode's rules.
	///
	/// Fields are independent: both may fail at once, each reporting only
	/// its first failing rule. A valid outcome carries the credentials
	/// exactly as given.
	pub fn validate(&self, mode: FormMode, credentials: &Credentials) -> ValidationOutcome {
		let mut errors = FieldErrors::new();

		if let Err(e) = self.email_field.validate(&credentials.email) {
			errors.insert(EMAIL_FIELD, e.message());
		}
		if let Err(e) = self.policy(mode).validate(&credentials.password) {
			errors.insert(PASSWORD_FIELD, e.message());
		}

		if errors.is_empty() {
			ValidationOutcome::Valid(credentials.clone())
		} else {
			ValidationOutcome::Invalid(errors)
		}
	}
}

impl Default for CredentialsForm {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form() -> CredentialsForm {
		CredentialsForm::new()
	}

	#[test]
	fn test_valid_login() {
		let outcome = form().validate(
			FormMode::Login,
			&Credentials::new("user@example.com", "x"),
		);
		assert_eq!(
			outcome,
			ValidationOutcome::Valid(Credentials::new("user@example.com", "x"))
		);
	}

	#[test]
	fn test_both_fields_fail_independently() {
		let outcome = form().validate(FormMode::SignUp, &Credentials::new("", ""));
		let errors = outcome.into_errors().unwrap();
		assert_eq!(errors.len(), 2);
		assert_eq!(errors.email(), Some("Email is required"));
		assert_eq!(errors.password(), Some("Password is required"));
	}

	#[test]
	fn test_single_field_failure_leaves_other_unreported() {
		let outcome = form().validate(
			FormMode::Login,
			&Credentials::new("not-an-email", "hunter2"),
		);
		let errors = outcome.into_errors().unwrap();
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.email(), Some("Invalid email"));
		assert_eq!(errors.password(), None);
	}

	#[test]
	fn test_mode_selects_policy() {
		let credentials = Credentials::new("user@example.com", "hunter2");
		let form = form();
		assert!(form.validate(FormMode::Login, &credentials).is_valid());
		assert_eq!(
			form.validate(FormMode::SignUp, &credentials)
				.into_errors()
				.unwrap()
				.password(),
			Some("Password must be at least 8 characters")
		);
	}

	#[test]
	fn test_valid_outcome_preserves_input_verbatim() {
		// No trimming, no case folding
		let credentials = Credentials::new("User@Example.COM", "Abcdefg1 ");
		let outcome = form().validate(FormMode::SignUp, &credentials);
		assert_eq!(outcome, ValidationOutcome::Valid(credentials));
	}

	#[test]
	fn test_uniform_policy_configuration() {
		let form = form().with_uniform_policy(|| PasswordPolicy::basic(8));
		let credentials = Credentials::new("user@example.com", "short");
		for mode in [FormMode::Login, FormMode::SignUp] {
			assert_eq!(
				form.validate(mode, &credentials)
					.into_errors()
					.unwrap()
					.password(),
				Some("Password must contain at least 8 characters")
			);
		}
	}

	#[test]
	fn test_field_errors_index() {
		let outcome = form().validate(FormMode::Login, &Credentials::new("", ""));
		let errors = outcome.into_errors().unwrap();
		assert_eq!(&errors[EMAIL_FIELD], "Email is required");
	}

	#[test]
	fn test_mode_toggled() {
		assert_eq!(FormMode::Login.toggled(), FormMode::SignUp);
		assert_eq!(FormMode::SignUp.toggled(), FormMode::Login);
	}

	#[test]
	fn test_field_errors_serialize_as_plain_mapping() {
		let outcome = form().validate(FormMode::SignUp, &Credentials::new("", "abc"));
		let errors = outcome.into_errors().unwrap();

		assert_eq!(
			serde_json::to_value(&errors).unwrap(),
			serde_json::json!({
				"email": "Email is required",
				"password": "Password must be at least 8 characters",
			})
		);
	}

	#[test]
	fn test_mode_serializes_snake_case() {
		assert_eq!(
			serde_json::to_value(FormMode::SignUp).unwrap(),
			serde_json::json!("sign_up")
		);
	}
}
