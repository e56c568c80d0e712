//! Credentials form validation for Grappelli
//!
//! This crate is the engine behind the login / sign-up screen:
//! - mode-dependent validation of an email / password pair, producing
//!   either the credentials unchanged or a first-error-per-field mapping,
//! - ordered, short-circuit [`PasswordPolicy`] rule lists, with the login,
//!   sign-up, and single-length-rule configurations as presets,
//! - advisory [`PasswordStrength`] classification, recomputed per
//!   keystroke by the screen layer and never gating submission.

pub mod email_field;
pub mod field;
pub mod form;
pub mod policy;
pub mod strength;

pub use email_field::EmailField;
pub use field::{FieldError, FieldResult};
pub use form::{
	Credentials, CredentialsForm, FieldErrors, FormMode, ValidationOutcome, EMAIL_FIELD,
	PASSWORD_FIELD,
};
pub use policy::{PasswordPolicy, PasswordRule};
pub use strength::{classify_strength, PasswordStrength};
