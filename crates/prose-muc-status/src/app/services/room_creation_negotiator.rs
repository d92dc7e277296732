// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info, warn};

use crate::app::deps::{
    AppDependencies, DynAppConfig, DynMucRoom, DynRoomCreationDialogs, DynTranslator,
};
use crate::domain::general::services::{SelectionDialog, TranslationArgs, TranslationKey};
use crate::domain::rooms::models::{
    CreationTrigger, NegotiationOutcome, NegotiationResolution, NegotiationState,
    RoomConfigurationResponse, RoomCreationChoice, RoomError,
};

/// Decides how a room we just created by joining it gets configured.
///
/// Auto-joined rooms are created without asking if an instant room was requested or a
/// configuration was stored. Otherwise the user is asked whether to accept the default
/// configuration or to change it.
pub struct RoomCreationNegotiator {
    room: DynMucRoom,
    config: DynAppConfig,
    dialogs: DynRoomCreationDialogs,
    translator: DynTranslator,
}

impl RoomCreationNegotiator {
    pub fn new(room: DynMucRoom, deps: &AppDependencies) -> Self {
        Self {
            room,
            config: deps.config.clone(),
            dialogs: deps.room_creation_dialogs.clone(),
            translator: deps.translator.clone(),
        }
    }

    /// Drives the negotiation to completion and reports its result to the room.
    pub async fn run(self) -> NegotiationResolution {
        let mut state = NegotiationState::Decide;

        loop {
            let next_state = match state {
                NegotiationState::Done(resolution) => {
                    self.report(&resolution);
                    return resolution;
                }
                state => self.advance(state).await,
            };
            debug!(
                "Room creation negotiation for {} moved to {:?}.",
                self.room.jid(),
                next_state
            );
            state = next_state;
        }
    }

    async fn advance(&self, state: NegotiationState) -> NegotiationState {
        match state {
            NegotiationState::Decide => self.decide(),
            NegotiationState::CreatingInstant { trigger } => {
                let result = self.room.create_instant_room().await;
                Self::finish(result, move || match trigger {
                    CreationTrigger::AutoJoin => NegotiationResolution::Created,
                    CreationTrigger::UserChoice => {
                        NegotiationResolution::Negotiated(NegotiationOutcome::Default)
                    }
                })
            }
            NegotiationState::CreatingPreconfigured => {
                let result = self.room.create_preconfigured_room().await;
                Self::finish(result, || NegotiationResolution::Created)
            }
            NegotiationState::AwaitingUserChoice => match self.await_user_choice().await {
                Ok(RoomCreationChoice::Default) => {
                    self.room
                        .set_room_configuration(self.config.instant_room_template.clone());
                    NegotiationState::CreatingInstant {
                        trigger: CreationTrigger::UserChoice,
                    }
                }
                Ok(RoomCreationChoice::Change) => NegotiationState::ConfiguringRoom,
                Err(error) => NegotiationState::Done(NegotiationResolution::Failed(
                    error.to_string(),
                )),
            },
            NegotiationState::ConfiguringRoom => {
                let result = self.dialogs.configure_room(self.room.clone()).await;
                match result {
                    Ok(RoomConfigurationResponse::Acknowledged) => NegotiationState::Done(
                        NegotiationResolution::Negotiated(NegotiationOutcome::ChangeRequested),
                    ),
                    Ok(RoomConfigurationResponse::Canceled) => NegotiationState::Done(
                        NegotiationResolution::Negotiated(NegotiationOutcome::Canceled),
                    ),
                    Err(error) => {
                        NegotiationState::Done(NegotiationResolution::Failed(error.to_string()))
                    }
                }
            }
            NegotiationState::Done(resolution) => NegotiationState::Done(resolution),
        }
    }

    fn decide(&self) -> NegotiationState {
        if !self.room.is_auto_join() {
            return NegotiationState::AwaitingUserChoice;
        }

        if self.room.is_instant_room() {
            return NegotiationState::CreatingInstant {
                trigger: CreationTrigger::AutoJoin,
            };
        }

        if self.room.has_room_configuration() {
            return NegotiationState::CreatingPreconfigured;
        }

        NegotiationState::AwaitingUserChoice
    }

    async fn await_user_choice(&self) -> Result<RoomCreationChoice, RoomError> {
        let none = TranslationArgs::none();
        let dialog = SelectionDialog {
            header: format!(
                "{} ({})",
                self.translator.translate(TranslationKey::RoomCreation, &none),
                self.room.name()
            ),
            message: self.translator.translate(
                TranslationKey::DoYouWantToChangeTheDefaultRoomConfiguration,
                &none,
            ),
            primary_label: self.translator.translate(TranslationKey::Default, &none),
            option_label: self.translator.translate(TranslationKey::Change, &none),
        };

        self.dialogs.present_selection(dialog).await
    }

    fn finish(
        result: Result<(), RoomError>,
        resolution: impl FnOnce() -> NegotiationResolution,
    ) -> NegotiationState {
        match result {
            Ok(()) => NegotiationState::Done(resolution()),
            Err(error) => NegotiationState::Done(NegotiationResolution::Failed(error.to_string())),
        }
    }

    fn report(&self, resolution: &NegotiationResolution) {
        match resolution {
            NegotiationResolution::Created => {
                info!("Created room {} without user interaction.", self.room.jid())
            }
            NegotiationResolution::Negotiated(NegotiationOutcome::Canceled) => {
                info!("Configuration of room {} was canceled.", self.room.jid());
                self.room.add_system_message(self.translator.translate(
                    TranslationKey::ConfigurationCanceled,
                    &TranslationArgs::none(),
                ));
            }
            NegotiationResolution::Negotiated(outcome) => {
                info!("Negotiated room {} with outcome {:?}.", self.room.jid(), outcome)
            }
            NegotiationResolution::Failed(error) => {
                warn!("Failed to create room {}. {}", self.room.jid(), error);

                if self.config.report_room_creation_failures {
                    self.room.add_system_message(self.translator.translate(
                        TranslationKey::RoomCreationFailed,
                        &TranslationArgs::none(),
                    ));
                }
            }
        }
    }
}
