// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::rooms::models::{RoomConfigurationResponse, RoomCreationChoice, RoomError};
use crate::domain::rooms::services::MucRoom;
use crate::util::{SendUnlessWasm, SyncUnlessWasm};

/// A binary choice. The primary action maps to `RoomCreationChoice::Default`, the secondary
/// option to `RoomCreationChoice::Change`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionDialog {
    pub header: String,
    pub message: String,
    pub primary_label: String,
    pub option_label: String,
}

/// The presentation layer. Implementations own modality and how long the user may take.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomCreationDialogs: SendUnlessWasm + SyncUnlessWasm {
    async fn present_selection(
        &self,
        dialog: SelectionDialog,
    ) -> Result<RoomCreationChoice, RoomError>;

    /// Runs the full room configuration form negotiation for `room`.
    async fn configure_room(
        &self,
        room: Arc<dyn MucRoom>,
    ) -> Result<RoomConfigurationResponse, RoomError>;
}
