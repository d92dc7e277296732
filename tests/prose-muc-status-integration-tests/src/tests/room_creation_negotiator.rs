// prose-core-client/prose-muc-status-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::{predicate, Sequence};
use pretty_assertions::assert_eq;

use prose_muc_status::app::deps::DynMucRoom;
use prose_muc_status::dtos::{
    NegotiationOutcome, NegotiationResolution, PresenceCodeSet, RoomConfig,
    RoomConfigurationResponse, RoomCreationChoice, RoomError, SelectionDialog,
};
use prose_muc_status::test::{mock_data, MockAppDependencies, MockMucRoom};
use prose_muc_status::{AppConfig, RoomCreationNegotiator, StatusCodeHandler};

use super::helpers::{mock_room, record_system_messages};

fn mock_room_with_flags(
    is_auto_join: bool,
    is_instant_room: bool,
    has_room_configuration: bool,
) -> MockMucRoom {
    let mut room = mock_room();
    room.expect_is_auto_join().return_const(is_auto_join);
    room.expect_is_instant_room().return_const(is_instant_room);
    room.expect_has_room_configuration()
        .return_const(has_room_configuration);
    room
}

fn rejected() -> RoomError {
    RoomError::Rejected {
        room: mock_data::room_jid(),
        reason: "not-allowed".to_string(),
    }
}

#[tokio::test]
async fn test_creates_instant_room_without_asking_when_auto_joining() -> Result<()> {
    // The dialogs mock has no expectations and would panic if it was asked anything.
    let deps = MockAppDependencies::default();
    let task_spawner = deps.task_spawner.clone();
    let handler = StatusCodeHandler::from(deps.into_deps());

    let mut room = mock_room_with_flags(true, true, true);
    room.expect_create_instant_room()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));
    let messages = record_system_messages(&mut room);
    let room: DynMucRoom = Arc::new(room);

    handler.process_codes(&PresenceCodeSet::from(vec![201]), &room);

    task_spawner.run_pending().await;

    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_creates_preconfigured_room_without_asking_when_auto_joining() -> Result<()> {
    let deps = MockAppDependencies::default().into_deps();

    let mut room = mock_room_with_flags(true, false, true);
    room.expect_create_preconfigured_room()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(resolution, NegotiationResolution::Created);
    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_asks_user_when_auto_joined_room_has_no_stored_configuration() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.room_creation_dialogs
        .expect_present_selection()
        .once()
        .return_once(|_| Box::pin(async { Ok(RoomCreationChoice::Change) }));
    deps.room_creation_dialogs
        .expect_configure_room()
        .once()
        .return_once(|_| Box::pin(async { Ok(RoomConfigurationResponse::Acknowledged) }));
    let deps = deps.into_deps();

    let mut room = mock_room_with_flags(true, false, false);
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(
        resolution,
        NegotiationResolution::Negotiated(NegotiationOutcome::ChangeRequested)
    );
    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_default_choice_creates_instant_room_with_template() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.room_creation_dialogs
        .expect_present_selection()
        .once()
        .with(predicate::eq(SelectionDialog {
            header: "Room creation (Tea Party)".to_string(),
            message: "Do you want to change the default room configuration?".to_string(),
            primary_label: "Default".to_string(),
            option_label: "Change".to_string(),
        }))
        .return_once(|_| Box::pin(async { Ok(RoomCreationChoice::Default) }));
    let deps = deps.into_deps();

    let mut room = mock_room_with_flags(false, true, true);
    let mut seq = Sequence::new();
    room.expect_set_room_configuration()
        .once()
        .with(predicate::eq(RoomConfig::instant()))
        .in_sequence(&mut seq)
        .return_const(());
    room.expect_create_instant_room()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Ok(()) }));
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(
        resolution,
        NegotiationResolution::Negotiated(NegotiationOutcome::Default)
    );
    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_canceling_configuration_appends_single_notice() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.room_creation_dialogs
        .expect_present_selection()
        .once()
        .return_once(|_| Box::pin(async { Ok(RoomCreationChoice::Change) }));
    deps.room_creation_dialogs
        .expect_configure_room()
        .once()
        .return_once(|_| Box::pin(async { Ok(RoomConfigurationResponse::Canceled) }));
    let task_spawner = deps.task_spawner.clone();
    let handler = StatusCodeHandler::from(deps.into_deps());

    let mut room = mock_room_with_flags(false, false, false);
    let messages = record_system_messages(&mut room);
    let room: DynMucRoom = Arc::new(room);

    handler.process_codes(&PresenceCodeSet::from(vec![201]), &room);
    assert!(messages.lock().is_empty());

    task_spawner.run_pending().await;

    assert_eq!(
        *messages.lock(),
        vec!["Configuration canceled.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_swallows_creation_failures() -> Result<()> {
    let deps = MockAppDependencies::default().into_deps();

    let mut room = mock_room_with_flags(true, true, false);
    room.expect_create_instant_room()
        .once()
        .return_once(|| Box::pin(async { Err(rejected()) }));
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert!(matches!(resolution, NegotiationResolution::Failed(_)));
    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_swallows_dialog_failures() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.room_creation_dialogs
        .expect_present_selection()
        .once()
        .return_once(|_| Box::pin(async { Err(RoomError::DialogDismissed) }));
    let deps = deps.into_deps();

    let mut room = mock_room_with_flags(false, false, false);
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(
        resolution,
        NegotiationResolution::Failed(RoomError::DialogDismissed.to_string())
    );
    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_reports_creation_failures_when_configured() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.config = AppConfig {
        report_room_creation_failures: true,
        ..Default::default()
    };
    let deps = deps.into_deps();

    let mut room = mock_room_with_flags(true, false, true);
    room.expect_create_preconfigured_room()
        .once()
        .return_once(|| Box::pin(async { Err(rejected()) }));
    let messages = record_system_messages(&mut room);

    RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(
        *messages.lock(),
        vec!["The room could not be created.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_swallows_configuration_dialog_failures() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.room_creation_dialogs
        .expect_present_selection()
        .once()
        .return_once(|_| Box::pin(async { Ok(RoomCreationChoice::Change) }));
    deps.room_creation_dialogs
        .expect_configure_room()
        .once()
        .return_once(|_| Box::pin(async { Err(rejected()) }));
    let deps = deps.into_deps();

    let mut room = mock_room_with_flags(false, false, false);
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(
        resolution,
        NegotiationResolution::Failed(rejected().to_string())
    );
    assert!(messages.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_swallows_preconfigured_creation_failures() -> Result<()> {
    let deps = MockAppDependencies::default().into_deps();

    let mut room = mock_room_with_flags(true, false, true);
    room.expect_create_preconfigured_room()
        .once()
        .return_once(|| Box::pin(async { Err(rejected()) }));
    let messages = record_system_messages(&mut room);

    let resolution = RoomCreationNegotiator::new(Arc::new(room), &deps)
        .run()
        .await;

    assert_eq!(
        resolution,
        NegotiationResolution::Failed(rejected().to_string())
    );
    assert!(messages.lock().is_empty());
    Ok(())
}
