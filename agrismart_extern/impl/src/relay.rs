use std::sync::Arc;

use agrismart_extern_contracts::relay::EmailRelayApiService;
use agrismart_models::contact::ContactMessage;
use serde::Serialize;
use url::Url;

use crate::http::HttpClient;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailRelayApiServiceImpl {
    config: EmailRelayApiServiceConfig,
    client: HttpClient,
}

impl EmailRelayApiServiceImpl {
    pub fn new(config: EmailRelayApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailRelayApiServiceConfig {
    send_endpoint: Arc<Url>,
    service_id: Arc<str>,
    template_id: Arc<str>,
    public_key: Arc<str>,
}

impl EmailRelayApiServiceConfig {
    pub fn new(
        service_id: String,
        template_id: String,
        public_key: String,
        send_endpoint_override: Option<Url>,
    ) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }
}

impl EmailRelayApiService for EmailRelayApiServiceImpl {
    async fn send(&self, message: ContactMessage) -> anyhow::Result<()> {
        self.client
            .post((*self.config.send_endpoint).clone())
            .json(&SendRequest {
                service_id: &self.config.service_id,
                template_id: &self.config.template_id,
                user_id: &self.config.public_key,
                template_params: TemplateParams {
                    name: &message.name,
                    email: message.email.as_str(),
                    phone: &message.phone,
                    message: &message.message,
                },
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}
