//! Password strength classification
//!
//! Advisory only: the strength label is display feedback and never gates
//! submission. Validation is the policy's job.

use grappelli_validators::{CharClassValidator, MinLengthValidator, Validator};
use serde::{Deserialize, Serialize};

/// Strength bucket for a password, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
	/// No password entered yet
	None,
	Weak,
	Medium,
	Strong,
}

impl PasswordStrength {
	/// Display label; empty for [`PasswordStrength::None`].
	pub fn label(&self) -> &'static str {
		match self {
			PasswordStrength::None => "",
			PasswordStrength::Weak => "Weak",
			PasswordStrength::Medium => "Medium",
			PasswordStrength::Strong => "Strong",
		}
	}
}

impl std::fmt::Display for PasswordStrength {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}

const LADDER: [PasswordStrength; 3] = [
	PasswordStrength::Weak,
	PasswordStrength::Medium,
	PasswordStrength::Strong,
];

/// Classifies a password into a strength bucket.
///
/// Four rules are evaluated unconditionally: length ≥ 8, contains an
/// uppercase letter, contains a digit, contains a lowercase letter. The
/// count of passing rules indexes into Weak/Medium/Strong, clamped at
/// both ends: 0 or 1 → Weak, 2 → Medium, 3 or 4 → Strong.
///
/// # Examples
///
/// ```
/// use grappelli_forms::{classify_strength, PasswordStrength};
///
/// assert_eq!(classify_strength(""), PasswordStrength::None);
/// assert_eq!(classify_strength("ab"), PasswordStrength::Weak);
/// assert_eq!(classify_strength("abcdefgh"), PasswordStrength::Medium);
/// assert_eq!(classify_strength("Abcdefg1"), PasswordStrength::Strong);
/// ```
pub fn classify_strength(password: &str) -> PasswordStrength {
	if password.is_empty() {
		return PasswordStrength::None;
	}

	let rules = [
		MinLengthValidator::new(8).validate(password).is_ok(),
		CharClassValidator::uppercase().validate(password).is_ok(),
		CharClassValidator::digit().validate(password).is_ok(),
		CharClassValidator::lowercase().validate(password).is_ok(),
	];
	let passed = rules.iter().filter(|&&passed| passed).count();

	LADDER[passed.min(LADDER.len()).saturating_sub(1)]
}
