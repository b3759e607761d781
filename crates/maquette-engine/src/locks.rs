// Copyright 2025 the maquette developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use maquette_core::scene::SceneId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Hands out one async mutex per scene, serializing mutations per scene id
/// within this process.
///
/// The save sequence is several store round trips with no transaction
/// around them; the lease ensures two in-process writers cannot interleave
/// those steps on the same scene. Cross-process races are left to the
/// compare-and-swap on the registry write.
///
/// Entries are never reclaimed; the table grows with the number of
/// distinct scenes this process has mutated, which stays small.
#[derive(Debug, Default)]
pub struct SceneLocks {
    locks: Mutex<HashMap<SceneId, Arc<Mutex<()>>>>,
}

impl SceneLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mutex guarding `id`, creating it on first use.
    pub async fn lock_for(&self, id: &SceneId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(*id).or_default().clone()
    }
}
