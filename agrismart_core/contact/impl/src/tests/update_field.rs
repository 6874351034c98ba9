use agrismart_core_contact_contracts::{ContactFormService, SubmissionStatus};
use agrismart_extern_contracts::relay::MockEmailRelayApiService;
use agrismart_models::contact::{ContactField, FieldErrors};

use crate::tests::make_sut;

#[tokio::test]
async fn overwrites_the_addressed_slot() {
    // Arrange
    let sut = make_sut(MockEmailRelayApiService::new());

    // Act
    sut.update_field(ContactField::Name, "Amina".into()).await;
    sut.update_field(ContactField::Name, "Amina Yusuf".into())
        .await;
    sut.update_field(ContactField::Phone, "+252611234567".into())
        .await;

    // Assert
    let snapshot = sut.snapshot().await;
    assert_eq!(snapshot.draft.name, "Amina Yusuf");
    assert_eq!(snapshot.draft.phone, "+252611234567");
    assert_eq!(snapshot.draft.email, "");
    assert_eq!(snapshot.status, SubmissionStatus::Idle);
    assert_eq!(snapshot.errors, FieldErrors::default());
}

#[tokio::test]
async fn notifies_subscribers() {
    // Arrange
    let sut = make_sut(MockEmailRelayApiService::new());
    let mut rx = sut.subscribe();

    // Act
    sut.update_field(ContactField::Message, "Interested in soil sensors".into())
        .await;

    // Assert
    assert!(rx.has_changed().unwrap());
    assert_eq!(
        rx.borrow_and_update().draft.message,
        "Interested in soil sensors"
    );
}
