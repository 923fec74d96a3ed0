//! Registry behavior seen through the gate.

use gate_service::models::MeetingId;
use gate_service::registry::MeetingRegistry;
use gate_service::services::ModeratorCredentialValidator;
use gate_test_utils::{registry_with, seeded_registry, MeetingBuilder, TEST_MEETING_ID};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

#[tokio::test]
async fn test_seeded_registry_contains_fixture_meeting() {
    let registry = seeded_registry().await;
    assert_eq!(registry.len().await, 1);

    let meeting = registry
        .lookup(&MeetingId::from(TEST_MEETING_ID))
        .await
        .expect("lookup should succeed")
        .expect("fixture meeting should exist");
    assert_eq!(meeting.meeting_id, MeetingId::from(TEST_MEETING_ID));
    assert_eq!(
        meeting.moderator_credential.expose_secret(),
        gate_test_utils::TEST_MODERATOR_CREDENTIAL
    );
}

#[tokio::test]
async fn test_credentials_are_scoped_to_their_meeting() {
    let registry = registry_with(vec![
        MeetingBuilder::new()
            .with_id("standup")
            .with_moderator_credential("alpha")
            .build(),
        MeetingBuilder::new()
            .with_id("retro")
            .with_moderator_credential("bravo")
            .build(),
    ])
    .await;
    let validator = ModeratorCredentialValidator::new(registry);

    assert!(
        validator
            .is_valid_moderator_credential(
                Some(&MeetingId::from("standup")),
                Some(&SecretString::from("alpha")),
            )
            .await
    );

    // The other meeting's credential does not transfer
    assert!(
        !validator
            .is_valid_moderator_credential(
                Some(&MeetingId::from("standup")),
                Some(&SecretString::from("bravo")),
            )
            .await
    );
    assert!(
        validator
            .is_valid_moderator_credential(
                Some(&MeetingId::from("retro")),
                Some(&SecretString::from("bravo")),
            )
            .await
    );
}

#[tokio::test]
async fn test_registry_mutation_is_visible_across_checks() {
    let registry = seeded_registry().await;
    let validator =
        ModeratorCredentialValidator::new(Arc::clone(&registry) as Arc<dyn MeetingRegistry>);

    let meeting_id = MeetingId::from(TEST_MEETING_ID);
    let candidate = SecretString::from(gate_test_utils::TEST_MODERATOR_CREDENTIAL);

    assert!(
        validator
            .is_valid_moderator_credential(Some(&meeting_id), Some(&candidate))
            .await
    );

    // Meeting ends; the registry owner removes it
    registry.remove(&meeting_id).await;

    assert!(
        !validator
            .is_valid_moderator_credential(Some(&meeting_id), Some(&candidate))
            .await
    );
}

#[tokio::test]
async fn test_rotated_credential_takes_effect() {
    let registry = seeded_registry().await;
    let validator =
        ModeratorCredentialValidator::new(Arc::clone(&registry) as Arc<dyn MeetingRegistry>);

    let meeting_id = MeetingId::from(TEST_MEETING_ID);

    // Registry owner replaces the meeting with a rotated credential
    registry
        .insert(
            MeetingBuilder::new()
                .with_id(TEST_MEETING_ID)
                .with_moderator_credential("rotated")
                .build(),
        )
        .await;

    assert!(
        !validator
            .is_valid_moderator_credential(
                Some(&meeting_id),
                Some(&SecretString::from(
                    gate_test_utils::TEST_MODERATOR_CREDENTIAL
                )),
            )
            .await
    );
    assert!(
        validator
            .is_valid_moderator_credential(Some(&meeting_id), Some(&SecretString::from("rotated")))
            .await
    );
}
