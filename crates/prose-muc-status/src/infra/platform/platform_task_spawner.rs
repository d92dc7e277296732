// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::general::services::TaskSpawner;
use crate::util::{spawn, PinnedFuture};

/// Spawns onto tokio natively and onto the browser's microtask queue in Wasm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTaskSpawner;

impl TaskSpawner for PlatformTaskSpawner {
    fn spawn(&self, task: PinnedFuture<()>) {
        spawn(task)
    }
}
