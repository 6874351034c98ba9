use std::time::Duration;

use agrismart_core_contact_contracts::{
    APOLOGY_MESSAGE, CONFIRMATION_MESSAGE, ContactFormService, ContactSubmitError,
    SubmissionStatus,
};
use agrismart_extern_contracts::relay::MockEmailRelayApiService;
use agrismart_models::contact::ContactDraft;
use agrismart_utils::{assert_matches, Apply};
use pretty_assertions::assert_eq;

use crate::tests::{fill_draft, make_sut, valid_draft, valid_message};

#[tokio::test(start_paused = true)]
async fn succeeded_resets_to_idle_after_ttl() {
    // Arrange
    let relay_api = MockEmailRelayApiService::new().with_send(valid_message(), Ok(()));
    let sut = make_sut(relay_api);
    fill_draft(&sut, &valid_draft()).await;

    // Act
    sut.submit().await.unwrap();

    // Assert
    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(
        sut.snapshot().await.status,
        SubmissionStatus::Succeeded {
            message: CONFIRMATION_MESSAGE
        }
    );

    let mut rx = sut.subscribe();
    let snapshot = rx
        .wait_for(|snapshot| snapshot.status == SubmissionStatus::Idle)
        .await
        .unwrap()
        .clone();
    assert_eq!(snapshot.draft, ContactDraft::default());
}

#[tokio::test(start_paused = true)]
async fn failed_resets_to_idle_after_ttl() {
    // Arrange
    let relay_api = MockEmailRelayApiService::new()
        .with_send(valid_message(), Err(anyhow::anyhow!("relay unavailable")));
    let sut = make_sut(relay_api);
    fill_draft(&sut, &valid_draft()).await;

    // Act
    assert_matches!(sut.submit().await, Err(ContactSubmitError::Send));

    // Assert
    let mut rx = sut.subscribe();
    let snapshot = rx
        .wait_for(|snapshot| snapshot.status == SubmissionStatus::Idle)
        .await
        .unwrap()
        .clone();
    // the draft survives the failed cycle for a retry
    assert_eq!(snapshot.draft, valid_draft());
}

#[tokio::test(start_paused = true)]
async fn newer_cycle_supersedes_pending_reset() {
    // Arrange
    let retry_draft = valid_draft().with(|draft| draft.message = "Any update on this?".into());
    let relay_api = MockEmailRelayApiService::new()
        .with_send(valid_message(), Ok(()))
        .with_send(
            retry_draft.validate().unwrap(),
            Err(anyhow::anyhow!("relay unavailable")),
        );
    let sut = make_sut(relay_api);
    fill_draft(&sut, &valid_draft()).await;

    // Act: a second cycle starts 2s into the first cycle's display window
    // and fails.
    sut.submit().await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    fill_draft(&sut, &retry_draft).await;
    assert_matches!(sut.submit().await, Err(ContactSubmitError::Send));

    // Assert: 6s in, the first cycle's timer has come and gone without
    // clobbering the newer status.
    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(
        sut.snapshot().await.status,
        SubmissionStatus::Failed {
            message: APOLOGY_MESSAGE
        }
    );

    // The second cycle's own timer still resets at 7s.
    let mut rx = sut.subscribe();
    let snapshot = rx
        .wait_for(|snapshot| snapshot.status == SubmissionStatus::Idle)
        .await
        .unwrap()
        .clone();
    assert_eq!(snapshot.draft, retry_draft);
}
