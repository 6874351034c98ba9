use agrismart_config::Config;
use agrismart_core_contact_contracts::{ContactFormService, ContactSubmitError};
use agrismart_core_contact_impl::{ContactFormConfig, ContactFormServiceImpl};
use agrismart_extern_impl::relay::{EmailRelayApiServiceConfig, EmailRelayApiServiceImpl};
use agrismart_models::contact::ContactField;
use anyhow::bail;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Send a contact message through the configured email relay
    Send {
        /// Full Name
        #[arg(long)]
        name: String,
        /// Email Address
        #[arg(long)]
        email: String,
        /// Phone Number
        #[arg(long)]
        phone: String,
        /// Message
        #[arg(long)]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                phone,
                message,
            } => send(config, name, email, phone, message).await,
        }
    }
}

async fn send(
    config: Config,
    name: String,
    email: String,
    phone: String,
    message: String,
) -> anyhow::Result<()> {
    let relay_api = EmailRelayApiServiceImpl::new(EmailRelayApiServiceConfig::new(
        config.relay.service_id,
        config.relay.template_id,
        config.relay.public_key,
        config.relay.send_endpoint_override,
    ));
    let form = ContactFormServiceImpl::new(
        relay_api,
        ContactFormConfig {
            status_ttl: config.contact.status_ttl.into(),
        },
    );

    for (field, value) in [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Phone, phone),
        (ContactField::Message, message),
    ] {
        form.update_field(field, value).await;
    }

    match form.submit().await {
        Ok(()) => {
            let status = form.snapshot().await.status;
            println!("{}", status.message().unwrap_or_default());
            Ok(())
        }
        Err(ContactSubmitError::Validation(errors)) => {
            for field in ContactField::ALL {
                if let Some(error) = errors.get(field) {
                    eprintln!("{}: {error}", field.label());
                }
            }
            bail!("The contact message is invalid")
        }
        Err(err) => Err(err.into()),
    }
}
