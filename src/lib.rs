//! # Grappelli
//!
//! Login and sign-up form screens with client-side validation, modeled
//! on the classic mobile auth flow: two modes over one email/password
//! form, graduated sign-up password rules, an advisory strength meter,
//! and a "remember me" persisted-email convenience.
//!
//! The workspace splits along its seams:
//!
//! - [`validators`]: rule primitives, the `Validator` trait and the
//!   string/character-class/email validators.
//! - [`forms`]: the validation engine, `CredentialsForm` with its ordered
//!   `PasswordPolicy` rule lists and strength classification.
//! - [`screens`]: the per-screen state machine plus the storage and
//!   notification collaborator traits.
//!
//! ## Quick start
//!
//! ```
//! use grappelli::{AuthScreen, InMemoryStore, RecordingNotifier};
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut screen = AuthScreen::new(
//!         Arc::new(InMemoryStore::new()),
//!         Arc::new(RecordingNotifier::new()),
//!     );
//!     screen.load_remembered_email().await;
//!
//!     screen.set_email("user@example.com");
//!     screen.set_password("hunter2");
//!     screen.set_remember_me(true);
//!
//!     let outcome = screen.submit().await;
//!     assert!(outcome.is_accepted());
//! }
//! ```
//!
//! Validation is pure and collaborator-free; the async surface is
//! confined to the screen's three storage touchpoints and the success
//! alert. There is no backend: what "submit" means beyond validation,
//! notification, and the remembered email is the embedding app's
//! business.

pub use grappelli_forms as forms;
pub use grappelli_screens as screens;
pub use grappelli_validators as validators;

pub use grappelli_forms::{
	classify_strength, Credentials, CredentialsForm, EmailField, FieldError, FieldErrors,
	FormMode, PasswordPolicy, PasswordRule, PasswordStrength, ValidationOutcome,
};
pub use grappelli_screens::{
	Alert, AuthScreen, InMemoryStore, KeyValueStore, Notifier, RecordingNotifier, StorageError,
	SubmissionOutcome, REMEMBERED_EMAIL_KEY,
};
pub use grappelli_validators::{ValidationError, Validator};
