// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::{debug, info};

use crate::app::deps::{AppDependencies, DynAppConfig, DynMucRoom, DynTaskSpawner, DynTranslator};
use crate::app::services::RoomCreationNegotiator;
use crate::domain::general::services::{TranslationArgs, TranslationKey};
use crate::domain::rooms::models::{PresenceCodeSet, StatusCode, StatusCodeAction};

/// Turns the status codes of a MUC presence into notices and room state changes.
pub struct StatusCodeHandler {
    deps: Arc<AppDependencies>,
}

impl StatusCodeHandler {
    pub fn new(deps: Arc<AppDependencies>) -> Self {
        Self { deps }
    }

    /// Handles each code of `codes` in order. Codes without meaning are ignored. Notices are
    /// appended to `room` in the order of the codes that produced them.
    pub fn process_codes(&self, codes: &PresenceCodeSet, room: &DynMucRoom) {
        let is_self_referred = codes.is_self_referred();

        for value in codes.raw_codes() {
            let Ok(code) = StatusCode::try_from(*value) else {
                debug!("Ignoring unknown status code {} in room {}.", value, room.jid());
                continue;
            };

            if let Some(text) = self.process_code(code, is_self_referred, room) {
                room.add_system_message(text);
            }
        }
    }

    fn process_code(
        &self,
        code: StatusCode,
        is_self_referred: bool,
        room: &DynMucRoom,
    ) -> Option<String> {
        match code.action() {
            StatusCodeAction::Notice(key) | StatusCodeAction::ServiceShutdown(key) => {
                Some(self.translate(key))
            }
            StatusCodeAction::RefreshFeatures(key) => {
                info!("Refreshing features of room {} ({}).", room.jid(), code);
                room.refresh_features();
                Some(self.translate(key))
            }
            StatusCodeAction::ReassertSelfPresence => {
                if let Some(nickname) = room.nickname() {
                    room.set_nickname(nickname);
                }
                room.set_member_list_complete();
                None
            }
            StatusCodeAction::NegotiateRoomCreation => {
                info!("Room {} was created by joining it.", room.jid());
                let negotiator = RoomCreationNegotiator::new(room.clone(), &self.deps);
                self.task_spawner().spawn(Box::pin(async move {
                    negotiator.run().await;
                }));
                None
            }
            StatusCodeAction::Removal {
                self_key,
                other_key,
            } => {
                if is_self_referred {
                    return Some(self.translate(self_key));
                }

                // Read now, the room may forget the occupant right after this presence.
                let nickname = room
                    .nickname()
                    .unwrap_or_else(|| self.config().missing_nickname_placeholder.clone());

                Some(self.translator().translate(
                    other_key,
                    &TranslationArgs::none()
                        .with_param("nickname", nickname)
                        .escaping_interpolation(),
                ))
            }
        }
    }

    fn translate(&self, key: TranslationKey) -> String {
        self.translator().translate(key, &TranslationArgs::none())
    }

    fn translator(&self) -> &DynTranslator {
        &self.deps.translator
    }

    fn task_spawner(&self) -> &DynTaskSpawner {
        &self.deps.task_spawner
    }

    fn config(&self) -> &DynAppConfig {
        &self.deps.config
    }
}

impl From<AppDependencies> for StatusCodeHandler {
    fn from(deps: AppDependencies) -> Self {
        Self::new(Arc::new(deps))
    }
}
