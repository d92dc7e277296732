// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::AppConfig;
use crate::domain::general::services::{RoomCreationDialogs, TaskSpawner, Translator};
use crate::domain::rooms::services::MucRoom;
use crate::infra::localization::CatalogTranslator;
use crate::infra::platform::PlatformTaskSpawner;

pub type DynAppConfig = Arc<AppConfig>;
pub type DynMucRoom = Arc<dyn MucRoom>;
pub type DynRoomCreationDialogs = Arc<dyn RoomCreationDialogs>;
pub type DynTaskSpawner = Arc<dyn TaskSpawner>;
pub type DynTranslator = Arc<dyn Translator>;

pub struct AppDependencies {
    pub config: DynAppConfig,
    pub room_creation_dialogs: DynRoomCreationDialogs,
    pub task_spawner: DynTaskSpawner,
    pub translator: DynTranslator,
}

impl AppDependencies {
    /// Uses the English catalog, the platform's executor and the default configuration.
    pub fn new(room_creation_dialogs: DynRoomCreationDialogs) -> Self {
        Self {
            config: Arc::new(AppConfig::default()),
            room_creation_dialogs,
            task_spawner: Arc::new(PlatformTaskSpawner),
            translator: Arc::new(CatalogTranslator::english()),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn with_translator(mut self, translator: DynTranslator) -> Self {
        self.translator = translator;
        self
    }
}
