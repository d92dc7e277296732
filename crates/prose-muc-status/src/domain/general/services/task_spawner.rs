// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::util::{PinnedFuture, SendUnlessWasm, SyncUnlessWasm};

/// Runs work that must not block the caller, like the room creation negotiation.
pub trait TaskSpawner: SendUnlessWasm + SyncUnlessWasm {
    fn spawn(&self, task: PinnedFuture<()>);
}
