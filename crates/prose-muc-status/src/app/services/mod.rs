// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_creation_negotiator::RoomCreationNegotiator;

mod room_creation_negotiator;
