use std::future::Future;

use agrismart_models::contact::{ContactDraft, ContactField, FieldErrors};
use thiserror::Error;
use tokio::sync::watch;

pub const CONFIRMATION_MESSAGE: &str = "Message sent! We'll get back to you within 24 hours.";
pub const APOLOGY_MESSAGE: &str = "Failed to send message. Please try again later.";

/// The contact form validation and submission controller.
///
/// Owns the draft, the per-field validation errors and the submission
/// status. A presentation layer only ever reads projections of that state
/// via [`snapshot`](Self::snapshot) or [`subscribe`](Self::subscribe) and
/// writes through [`update_field`](Self::update_field) and
/// [`submit`](Self::submit).
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Overwrites one draft slot. Always succeeds and never touches the
    /// submission status.
    fn update_field(&self, field: ContactField, value: String) -> impl Future<Output = ()> + Send;

    /// Validates the draft and, if eligible, dispatches it to the email
    /// relay exactly once.
    fn submit(&self) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    fn snapshot(&self) -> impl Future<Output = ContactFormSnapshot> + Send;

    /// Subscribes to the read-projection. The receiver yields a fresh
    /// snapshot on every state change.
    fn subscribe(&self) -> watch::Receiver<ContactFormSnapshot>;
}

/// Submission lifecycle: `Idle` -> `Submitting` -> `Succeeded`/`Failed`
/// -> `Idle` after the configured display window. Cyclic, no terminal
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        message: &'static str,
    },
    Failed {
        message: &'static str,
    },
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    /// The user-visible result message, if the status carries one.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Succeeded { message } | Self::Failed { message } => Some(message),
        }
    }
}

/// Read-projection of the controller state consumed by a presentation
/// layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormSnapshot {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    /// At least one field failed its predicate. No relay call was made.
    #[error("The contact message contains invalid fields.")]
    Validation(FieldErrors),
    /// A previous submission is still in flight. No relay call was made.
    #[error("A submission is already in progress.")]
    InFlight,
    /// The relay attempt failed. The draft is preserved for a retry.
    #[error("Failed to send message.")]
    Send,
}
