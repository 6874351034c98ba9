use std::future::Future;

use agrismart_models::contact::ContactMessage;

/// The hosted transactional email relay.
///
/// The contract does not distinguish failure subtypes: transport errors,
/// non-2xx responses and relay-side rejections all surface as the error
/// case. A single attempt per call, no retry.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailRelayApiService: Send + Sync + 'static {
    fn send(&self, message: ContactMessage) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockEmailRelayApiService {
    pub fn with_send(mut self, message: ContactMessage, result: anyhow::Result<()>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
