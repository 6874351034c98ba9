use std::{sync::Arc, time::Duration};

use agrismart_core_contact_contracts::{
    APOLOGY_MESSAGE, CONFIRMATION_MESSAGE, ContactFormService, ContactFormSnapshot,
    ContactSubmitError, SubmissionStatus,
};
use agrismart_extern_contracts::relay::EmailRelayApiService;
use agrismart_models::contact::{ContactDraft, ContactField, FieldErrors};
use tokio::sync::{watch, Mutex};
use tracing::error;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<RelayApi> {
    relay_api: RelayApi,
    config: ContactFormConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    /// How long a `Succeeded`/`Failed` status stays visible before the
    /// automatic reset to `Idle`.
    pub status_ttl: Duration,
}

impl<RelayApi> ContactFormServiceImpl<RelayApi> {
    pub fn new(relay_api: RelayApi, config: ContactFormConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(ContactFormSnapshot::default());
        Self {
            relay_api,
            config,
            state: Arc::new(State {
                form: Mutex::new(FormState::default()),
                snapshot_tx,
            }),
        }
    }

    /// Resets the status to `Idle` once the display window elapses,
    /// unless a newer submission cycle has superseded `cycle` in the
    /// meantime.
    fn schedule_status_reset(&self, cycle: u64) {
        let state = Arc::clone(&self.state);
        let ttl = self.config.status_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut form = state.form.lock().await;
            if form.cycle == cycle {
                form.status = SubmissionStatus::Idle;
                state.publish(&form);
            }
        });
    }
}

impl<RelayApi> ContactFormService for ContactFormServiceImpl<RelayApi>
where
    RelayApi: EmailRelayApiService,
{
    #[tracing::instrument(skip(self, value))]
    async fn update_field(&self, field: ContactField, value: String) {
        let mut form = self.state.form.lock().await;
        form.draft.set(field, value);
        self.state.publish(&form);
    }

    #[tracing::instrument(skip(self))]
    async fn submit(&self) -> Result<(), ContactSubmitError> {
        // Validate and transition to `Submitting` under the lock, then
        // release it for the relay call so field edits stay possible
        // while the request is in flight.
        let (message, cycle) = {
            let mut form = self.state.form.lock().await;

            if form.status.is_submitting() {
                return Err(ContactSubmitError::InFlight);
            }

            match form.draft.validate() {
                Ok(message) => {
                    form.errors = FieldErrors::default();
                    form.status = SubmissionStatus::Submitting;
                    form.cycle += 1;
                    self.state.publish(&form);
                    (message, form.cycle)
                }
                Err(errors) => {
                    form.errors = errors.clone();
                    self.state.publish(&form);
                    return Err(ContactSubmitError::Validation(errors));
                }
            }
        };

        let result = self.relay_api.send(message).await;

        let mut form = self.state.form.lock().await;
        let outcome = match result {
            Ok(()) => {
                form.draft = ContactDraft::default();
                form.status = SubmissionStatus::Succeeded {
                    message: CONFIRMATION_MESSAGE,
                };
                Ok(())
            }
            Err(err) => {
                // The draft is preserved for a retry; the transport error
                // stays out of the user-visible message.
                error!("Failed to dispatch contact message to the email relay: {err:#}");
                form.status = SubmissionStatus::Failed {
                    message: APOLOGY_MESSAGE,
                };
                Err(ContactSubmitError::Send)
            }
        };
        self.state.publish(&form);
        drop(form);

        self.schedule_status_reset(cycle);

        outcome
    }

    async fn snapshot(&self) -> ContactFormSnapshot {
        self.state.form.lock().await.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<ContactFormSnapshot> {
        self.state.snapshot_tx.subscribe()
    }
}

#[derive(Debug)]
struct State {
    form: Mutex<FormState>,
    snapshot_tx: watch::Sender<ContactFormSnapshot>,
}

impl State {
    fn publish(&self, form: &FormState) {
        self.snapshot_tx.send_replace(form.snapshot());
    }
}

#[derive(Debug, Default)]
struct FormState {
    draft: ContactDraft,
    errors: FieldErrors,
    status: SubmissionStatus,
    /// Monotonic submission cycle counter. A pending status reset only
    /// applies while its cycle is still the current one, so a stale timer
    /// can never clobber the status of a newer submission.
    cycle: u64,
}

impl FormState {
    fn snapshot(&self) -> ContactFormSnapshot {
        ContactFormSnapshot {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            status: self.status,
        }
    }
}
