// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use muc_room::MucRoom;

mod muc_room;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::muc_room::MockMucRoom;
}
