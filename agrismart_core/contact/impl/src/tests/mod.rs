use std::{sync::Arc, time::Duration};

use agrismart_core_contact_contracts::ContactFormService;
use agrismart_extern_contracts::relay::MockEmailRelayApiService;
use agrismart_models::contact::{ContactDraft, ContactField, ContactMessage};

use crate::{ContactFormConfig, ContactFormServiceImpl};

mod status_timer;
mod update_field;

const STATUS_TTL: Duration = Duration::from_secs(5);

type Sut = Arc<ContactFormServiceImpl<MockEmailRelayApiService>>;

fn make_sut(relay_api: MockEmailRelayApiService) -> Sut {
    Arc::new(ContactFormServiceImpl::new(
        relay_api,
        ContactFormConfig {
            status_ttl: STATUS_TTL,
        },
    ))
}

fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Amina Yusuf".into(),
        email: "amina@example.com".into(),
        phone: "+252611234567".into(),
        message: "Interested in soil sensors".into(),
    }
}

fn valid_message() -> ContactMessage {
    valid_draft().validate().unwrap()
}

async fn fill_draft(sut: &Sut, draft: &ContactDraft) {
    for field in ContactField::ALL {
        sut.update_field(field, draft.get(field).to_owned()).await;
    }
}
