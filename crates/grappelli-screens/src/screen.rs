//! Auth screen state machine
//!
//! One [`AuthScreen`] per screen instance, holding local, non-shared
//! state: field values, inline error slots, the strength readout, and
//! the mode / visibility / remember-me flags. Every mutation happens on
//! one event-processing timeline; the only suspension points are the
//! three storage calls (read on mount, write or remove on a successful
//! login submission).

use crate::notify::Notifier;
use crate::storage::KeyValueStore;
use grappelli_forms::{
	classify_strength, Credentials, CredentialsForm, FieldErrors, FormMode, PasswordStrength,
	ValidationOutcome,
};
use std::sync::Arc;

/// Storage key for the persisted email.
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
	/// Validation passed; the user was notified and, in login mode, the
	/// remembered email was stored or cleared.
	Accepted(Credentials),
	/// Validation failed; no side effect was performed.
	Rejected(FieldErrors),
}

impl SubmissionOutcome {
	pub fn is_accepted(&self) -> bool {
		matches!(self, SubmissionOutcome::Accepted(_))
	}
}

/// Login / sign-up screen state.
///
/// # Examples
///
/// ```
/// use grappelli_screens::{AuthScreen, InMemoryStore, RecordingNotifier};
/// use std::sync::Arc;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let mut screen = AuthScreen::new(
///         Arc::new(InMemoryStore::new()),
///         Arc::new(RecordingNotifier::new()),
///     );
///     screen.set_email("user@example.com");
///     screen.set_password("hunter2");
///     screen.set_remember_me(true);
///     assert!(screen.submit().await.is_accepted());
/// }
/// ```
pub struct AuthScreen {
	form: CredentialsForm,
	mode: FormMode,
	email: String,
	password: String,
	show_password: bool,
	remember_me: bool,
	email_error: Option<String>,
	password_error: Option<String>,
	strength: PasswordStrength,
	store: Arc<dyn KeyValueStore>,
	notifier: Arc<dyn Notifier>,
}

impl AuthScreen {
	/// Creates a screen in login mode with the standard form.
	pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
		Self {
			form: CredentialsForm::new(),
			mode: FormMode::Login,
			email: String::new(),
			password: String::new(),
			show_password: false,
			remember_me: false,
			email_error: None,
			password_error: None,
			strength: PasswordStrength::None,
			store,
			notifier,
		}
	}

	/// Replaces the form configuration (policies, messages).
	pub fn with_form(mut self, form: CredentialsForm) -> Self {
		self.form = form;
		self
	}

	/// Sets the initial mode.
	pub fn with_mode(mut self, mode: FormMode) -> Self {
		self.mode = mode;
		self
	}

	// ------------------------------------------------------------------
	// State the rendering collaborator reads
	// ------------------------------------------------------------------

	pub fn mode(&self) -> FormMode {
		self.mode
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	pub fn show_password(&self) -> bool {
		self.show_password
	}

	pub fn remember_me(&self) -> bool {
		self.remember_me
	}

	pub fn email_error(&self) -> Option<&str> {
		self.email_error.as_deref()
	}

	pub fn password_error(&self) -> Option<&str> {
		self.password_error.as_deref()
	}

	/// Current strength bucket, recomputed on every password edit.
	pub fn strength(&self) -> PasswordStrength {
		self.strength
	}

	/// Strength label for display. Only the sign-up screen shows the
	/// meter, so this is `None` in login mode.
	pub fn strength_label(&self) -> Option<&'static str> {
		match self.mode {
			FormMode::SignUp => Some(self.strength.label()),
			FormMode::Login => None,
		}
	}

	/// Screen heading.
	pub fn title(&self) -> &'static str {
		match self.mode {
			FormMode::Login => "Login",
			FormMode::SignUp => "Sign Up",
		}
	}

	/// Submit button label; same wording as the heading.
	pub fn submit_label(&self) -> &'static str {
		self.title()
	}

	/// Prompt under the submit button that switches modes.
	pub fn toggle_prompt(&self) -> &'static str {
		match self.mode {
			FormMode::Login => "Don't have an account? Sign Up",
			FormMode::SignUp => "Already have an account? Login",
		}
	}

	/// The remember-me checkbox is only offered on the login screen.
	pub fn remember_me_available(&self) -> bool {
		self.mode == FormMode::Login
	}

	// ------------------------------------------------------------------
	// Events the rendering collaborator feeds back
	// ------------------------------------------------------------------

	/// Email keystroke: overwrite the value and clear the inline error.
	pub fn set_email(&mut self, text: impl Into<String>) {
		self.email = text.into();
		self.email_error = None;
	}

	/// Password keystroke: overwrite the value, clear the inline error,
	/// and recompute the strength readout.
	pub fn set_password(&mut self, text: impl Into<String>) {
		self.password = text.into();
		self.password_error = None;
		self.strength = classify_strength(&self.password);
	}

	/// Flips between login and sign-up. Field values, errors, and the
	/// strength readout are retained; nothing is re-validated until the
	/// next submission attempt.
	pub fn toggle_mode(&mut self) {
		self.mode = self.mode.toggled();
	}

	pub fn toggle_password_visibility(&mut self) {
		self.show_password = !self.show_password;
	}

	pub fn set_remember_me(&mut self, remember: bool) {
		self.remember_me = remember;
	}

	/// On-mount hook: preload the remembered email, if one is stored.
	///
	/// When a value exists the email field is filled in and remember-me
	/// is switched on. Read failures are logged and ignored.
	pub async fn load_remembered_email(&mut self) {
		match self.store.get(REMEMBERED_EMAIL_KEY).await {
			Ok(Some(email)) => {
				tracing::debug!(email = %email, "Loaded remembered email");
				self.email = email;
				self.remember_me = true;
			}
			Ok(None) => {}
			Err(e) => {
				tracing::warn!(error = %e, "Failed to read remembered email");
			}
		}
	}

	/// Submission attempt.
	///
	/// On validation failure the per-field error slots mirror the error
	/// mapping and nothing else happens. On success the user is notified
	/// once; then, in login mode only, the remembered email is stored or
	/// cleared according to the checkbox. Storage failures are logged and
	/// swallowed: the submission still succeeds.
	pub async fn submit(&mut self) -> SubmissionOutcome {
		let credentials = Credentials::new(self.email.clone(), self.password.clone());

		match self.form.validate(self.mode, &credentials) {
			ValidationOutcome::Invalid(errors) => {
				self.email_error = errors.email().map(str::to_string);
				self.password_error = errors.password().map(str::to_string);
				SubmissionOutcome::Rejected(errors)
			}
			ValidationOutcome::Valid(credentials) => {
				self.email_error = None;
				self.password_error = None;

				match self.mode {
					FormMode::Login => {
						self.notifier
							.alert(
								"Login Successful",
								&format!("Welcome back, {}!", credentials.email),
							)
							.await;
						self.persist_remembered_email(&credentials.email).await;
					}
					FormMode::SignUp => {
						self.notifier
							.alert(
								"Sign Up Successful",
								&format!("Welcome, {}!", credentials.email),
							)
							.await;
					}
				}

				tracing::debug!(mode = ?self.mode, "Submission accepted");
				SubmissionOutcome::Accepted(credentials)
			}
		}
	}

	async fn persist_remembered_email(&self, email: &str) {
		let result = if self.remember_me {
			self.store.set(REMEMBERED_EMAIL_KEY, email).await
		} else {
			self.store.remove(REMEMBERED_EMAIL_KEY).await
		};
		if let Err(e) = result {
			tracing::warn!(error = %e, "Failed to update remembered email");
		}
	}
}
