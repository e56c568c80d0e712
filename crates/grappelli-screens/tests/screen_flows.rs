//! Screen flow tests
//!
//! Whole-session scenarios: mount, typing, toggling, submitting, and the
//! remember-me lifecycle across consecutive sessions sharing one store.

use grappelli_forms::{CredentialsForm, PasswordPolicy, PasswordStrength};
use grappelli_screens::{
	AuthScreen, InMemoryStore, KeyValueStore, RecordingNotifier, REMEMBERED_EMAIL_KEY,
};
use std::sync::Arc;

fn new_screen(store: &Arc<InMemoryStore>) -> (AuthScreen, Arc<RecordingNotifier>) {
	let notifier = Arc::new(RecordingNotifier::new());
	let screen = AuthScreen::new(store.clone(), notifier.clone());
	(screen, notifier)
}

#[tokio::test]
async fn test_remember_me_lifecycle_across_sessions() {
	let store = Arc::new(InMemoryStore::new());

	// Session 1: nothing remembered, user logs in with remember-me on.
	let (mut screen, _) = new_screen(&store);
	screen.load_remembered_email().await;
	assert_eq!(screen.email(), "");

	screen.set_email("user@example.com");
	screen.set_password("hunter2");
	screen.set_remember_me(true);
	assert!(screen.submit().await.is_accepted());

	// Session 2: the email comes back pre-filled; the user opts out.
	let (mut screen, _) = new_screen(&store);
	screen.load_remembered_email().await;
	assert_eq!(screen.email(), "user@example.com");
	assert!(screen.remember_me());

	screen.set_password("hunter2");
	screen.set_remember_me(false);
	assert!(screen.submit().await.is_accepted());

	// Session 3: nothing remembered anymore.
	let (mut screen, _) = new_screen(&store);
	screen.load_remembered_email().await;
	assert_eq!(screen.email(), "");
	assert!(!screen.remember_me());
}

#[tokio::test]
async fn test_sign_up_flow_with_inline_corrections() {
	let store = Arc::new(InMemoryStore::new());
	let (mut screen, notifier) = new_screen(&store);
	screen.toggle_mode();

	// First attempt trips both fields.
	screen.set_email("nope");
	screen.set_password("abcdefgh");
	let outcome = screen.submit().await;
	assert!(!outcome.is_accepted());
	assert_eq!(screen.email_error(), Some("Invalid email"));
	assert_eq!(
		screen.password_error(),
		Some("Must include an uppercase letter")
	);
	assert!(notifier.alerts().await.is_empty());

	// Corrections clear errors keystroke by keystroke and move the meter.
	screen.set_email("user@example.com");
	assert_eq!(screen.email_error(), None);
	screen.set_password("Abcdefg1");
	assert_eq!(screen.password_error(), None);
	assert_eq!(screen.strength(), PasswordStrength::Strong);
	assert_eq!(screen.strength_label(), Some("Strong"));

	let outcome = screen.submit().await;
	assert!(outcome.is_accepted());
	let alerts = notifier.alerts().await;
	assert_eq!(alerts.len(), 1);
	assert_eq!(alerts[0].message, "Welcome, user@example.com!");

	// Sign-up never wrote through the storage seam.
	assert_eq!(store.get(REMEMBERED_EMAIL_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_mode_switch_applies_new_rules_only_at_next_submit() {
	let store = Arc::new(InMemoryStore::new());
	let (mut screen, _) = new_screen(&store);

	// Valid for login.
	screen.set_email("user@example.com");
	screen.set_password("hunter2");
	assert!(screen.submit().await.is_accepted());

	// Same values, stricter mode: nothing changes until submit is hit.
	screen.toggle_mode();
	assert_eq!(screen.email_error(), None);
	assert_eq!(screen.password_error(), None);

	let outcome = screen.submit().await;
	assert!(!outcome.is_accepted());
	assert_eq!(
		screen.password_error(),
		Some("Password must be at least 8 characters")
	);
}

#[tokio::test]
async fn test_screen_with_single_rule_form_configuration() {
	// The simpler of the two original screens: min-8 in both modes.
	let store = Arc::new(InMemoryStore::new());
	let notifier = Arc::new(RecordingNotifier::new());
	let mut screen = AuthScreen::new(store.clone(), notifier)
		.with_form(CredentialsForm::new().with_uniform_policy(|| PasswordPolicy::basic(8)));

	screen.set_email("user@example.com");
	screen.set_password("short");
	let outcome = screen.submit().await;
	assert!(!outcome.is_accepted());
	assert_eq!(
		screen.password_error(),
		Some("Password must contain at least 8 characters")
	);

	// All-lowercase is fine here; there are no character-class rules.
	screen.set_password("abcdefgh");
	assert!(screen.submit().await.is_accepted());
}
