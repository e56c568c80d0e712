//! Notification collaborator
//!
//! A modal alert primitive: one title, one message, shown once per
//! successful submission. The rendering layer supplies the real
//! implementation; [`RecordingNotifier`] covers tests and headless use.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A single alert that was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
	pub title: String,
	pub message: String,
}

/// Blocking/modal alert collaborator.
#[async_trait]
pub trait Notifier: Send + Sync {
	/// Present an alert with the given title and message.
	async fn alert(&self, title: &str, message: &str);
}

/// Notifier that records every alert instead of displaying it.
///
/// # Examples
///
/// ```
/// use grappelli_screens::notify::{Notifier, RecordingNotifier};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let notifier = RecordingNotifier::new();
///     notifier.alert("Login Successful", "Welcome back, user@example.com!").await;
///     assert_eq!(notifier.alerts().await.len(), 1);
/// }
/// ```
#[derive(Clone, Default)]
pub struct RecordingNotifier {
	alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingNotifier {
	pub fn new() -> Self {
		Self {
			alerts: Arc::new(Mutex::new(Vec::new())),
		}
	}

	/// Every alert shown so far, oldest first.
	pub async fn alerts(&self) -> Vec<Alert> {
		self.alerts.lock().await.clone()
	}
}

#[async_trait]
impl Notifier for RecordingNotifier {
	async fn alert(&self, title: &str, message: &str) {
		let mut alerts = self.alerts.lock().await;
		alerts.push(Alert {
			title: title.to_string(),
			message: message.to_string(),
		});
	}
}
