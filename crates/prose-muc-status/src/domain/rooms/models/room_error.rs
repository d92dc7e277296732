// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

#[derive(thiserror::Error, Debug)]
pub enum RoomError {
    #[error("Room {room} rejected the request: {reason}")]
    Rejected { room: BareJid, reason: String },
    #[error("The dialog was dismissed without a decision.")]
    DialogDismissed,
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
