// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_creation_dialogs::{RoomCreationDialogs, SelectionDialog};
pub use task_spawner::TaskSpawner;
pub use translator::{TranslationArgs, TranslationKey, Translator};

mod room_creation_dialogs;
mod task_spawner;
mod translator;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::room_creation_dialogs::MockRoomCreationDialogs;
    pub use super::translator::MockTranslator;
}
