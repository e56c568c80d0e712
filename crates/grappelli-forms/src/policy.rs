//! Password policies
//!
//! A policy is an ordered list of (validator, message) rules evaluated
//! short-circuit: the first failing rule's message is reported and the
//! rest are skipped. The login and sign-up screens are two configurations
//! of the same machinery.

use crate::field::{FieldError, FieldResult};
use grappelli_validators::{
	CharClassValidator, MinLengthValidator, RequiredValidator, Validator,
};

/// A single policy rule: a validator plus the message reported when it
/// fails.
pub struct PasswordRule {
	validator: Box<dyn Validator<str> + Send + Sync>,
	message: String,
}

impl PasswordRule {
	/// Creates a rule from a validator and its failure message.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::PasswordRule;
	/// use grappelli_validators::MinLengthValidator;
	///
	/// let rule = PasswordRule::new(
	///     MinLengthValidator::new(12),
	///     "Password must be at least 12 characters",
	/// );
	/// assert!(rule.check("a long enough password").is_ok());
	/// ```
	pub fn new(
		validator: impl Validator<str> + Send + Sync + 'static,
		message: impl Into<String>,
	) -> Self {
		Self {
			validator: Box::new(validator),
			message: message.into(),
		}
	}

	/// Runs the rule, mapping any validator failure to this rule's message.
	pub fn check(&self, value: &str) -> FieldResult<()> {
		self.validator
			.validate(value)
			.map_err(|_| FieldError::Validation(self.message.clone()))
	}

	/// The message reported when this rule fails.
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl std::fmt::Debug for PasswordRule {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PasswordRule")
			.field("message", &self.message)
			.finish_non_exhaustive()
	}
}

/// Ordered password rule list, evaluated short-circuit.
///
/// # Examples
///
/// ```
/// use grappelli_forms::PasswordPolicy;
///
/// let policy = PasswordPolicy::sign_up();
/// assert!(policy.validate("Abcdefg1").is_ok());
/// assert!(policy.validate("abc").is_err());
/// ```
#[derive(Debug, Default)]
pub struct PasswordPolicy {
	rules: Vec<PasswordRule>,
}

impl PasswordPolicy {
	/// Creates an empty policy that accepts every value.
	pub fn new() -> Self {
		Self { rules: vec![] }
	}

	/// Appends a rule to the policy.
	pub fn rule(
		mut self,
		validator: impl Validator<str> + Send + Sync + 'static,
		message: impl Into<String>,
	) -> Self {
		self.rules.push(PasswordRule::new(validator, message));
		self
	}

	/// The login policy: the password only has to be present.
	pub fn login() -> Self {
		Self::new().rule(RequiredValidator::new(), "Password is required")
	}

	/// The sign-up policy: presence, length, then one rule per required
	/// character class. Order matters; the first failure is reported.
	pub fn sign_up() -> Self {
		Self::new()
			.rule(RequiredValidator::new(), "Password is required")
			.rule(
				MinLengthValidator::new(8),
				"Password must be at least 8 characters",
			)
			.rule(
				CharClassValidator::uppercase(),
				"Must include an uppercase letter",
			)
			.rule(
				CharClassValidator::lowercase(),
				"Must include a lowercase letter",
			)
			.rule(CharClassValidator::digit(), "Must include a number")
	}

	/// A single length rule for both modes, as used by the simpler of the
	/// two original screens.
	pub fn basic(min: usize) -> Self {
		Self::new()
			.rule(RequiredValidator::new(), "Password is required")
			.rule(
				MinLengthValidator::new(min),
				format!("Password must contain at least {min} characters"),
			)
	}

	/// Validates a value against the rules in order, reporting the first
	/// failure.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		for rule in &self.rules {
			rule.check(value)?;
		}
		Ok(())
	}

	/// The rules in evaluation order.
	pub fn rules(&self) -> &[PasswordRule] {
		&self.rules
	}
}
