// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use jid::BareJid;

use crate::domain::rooms::models::{RoomConfig, RoomError};
use crate::util::{SendUnlessWasm, SyncUnlessWasm};

/// A joined MUC room as seen by the status code handler. The room is owned by the surrounding
/// session layer; the handler only reads from it and mutates it through these calls.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MucRoom: SendUnlessWasm + SyncUnlessWasm {
    fn jid(&self) -> BareJid;
    /// The room's display name.
    fn name(&self) -> String;

    fn nickname(&self) -> Option<String>;
    fn set_nickname(&self, nickname: String);
    fn set_member_list_complete(&self);
    fn refresh_features(&self);

    fn is_auto_join(&self) -> bool;
    /// Whether an instant room was requested for this room.
    fn is_instant_room(&self) -> bool;
    /// Whether a configuration was stored for this room ahead of time.
    fn has_room_configuration(&self) -> bool;
    fn set_room_configuration(&self, config: RoomConfig);

    async fn create_instant_room(&self) -> Result<(), RoomError>;
    async fn create_preconfigured_room(&self) -> Result<(), RoomError>;

    fn add_system_message(&self, text: String);
}
