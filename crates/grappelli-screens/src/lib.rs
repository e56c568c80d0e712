//! Screen layer for Grappelli
//!
//! Holds the per-screen state machine ([`AuthScreen`]) and the two
//! collaborator seams the surrounding app plugs into:
//! - [`KeyValueStore`]: persistence for the single remembered-email
//!   string,
//! - [`Notifier`]: the modal success alert.
//!
//! The rendering layer owns pixels; this crate owns state transitions.

pub mod notify;
pub mod screen;
pub mod storage;

pub use notify::{Alert, Notifier, RecordingNotifier};
pub use screen::{AuthScreen, SubmissionOutcome, REMEMBERED_EMAIL_KEY};
pub use storage::{InMemoryStore, KeyValueStore, StorageError};
