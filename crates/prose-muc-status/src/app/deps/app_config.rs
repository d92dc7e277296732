// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::rooms::models::RoomConfig;

pub struct AppConfig {
    /// The configuration applied when the user accepts the default configuration of a newly
    /// created room.
    pub instant_room_template: RoomConfig,
    /// Append a notice to the room when creating or configuring it failed. Failures are only
    /// logged otherwise.
    pub report_room_creation_failures: bool,
    /// Interpolated in removal notices when the removed occupant's nickname is not known
    /// anymore.
    pub missing_nickname_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instant_room_template: RoomConfig::instant(),
            report_room_creation_failures: false,
            missing_nickname_placeholder: String::new(),
        }
    }
}
