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

//! The engine's façade, wiring every component behind one handle.

use crate::config::EngineConfig;
use crate::coordinator::{SaveOutcome, SaveRequest, VersionTransition};
use crate::error::SceneResult;
use crate::gate::AccessGate;
use crate::history::{HistoryEntry, HistoryIndex};
use crate::locks::SceneLocks;
use crate::registry::{DisplayPatch, SceneRegistry};
use crate::retrieval::{Retrieval, VersionSelector};
use maquette_core::auth::Requester;
use maquette_core::naming::{validate_scene_name, Transliterator};
use maquette_core::scene::{SceneId, SceneNode};
use maquette_core::store::DocumentStore;
use std::sync::Arc;

/// One handle over the whole persistence engine.
///
/// All collaborators come in through the constructor (the store, the
/// transliteration collaborator, and the configuration), so the service
/// can be stood up against any backend, in tests as in production.
pub struct SceneService {
    registry: SceneRegistry,
    transition: VersionTransition,
    retrieval: Retrieval,
    history: HistoryIndex,
    gate: AccessGate,
    locks: Arc<SceneLocks>,
}

impl SceneService {
    /// Wires a service over the given collaborators.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        transliterator: Arc<dyn Transliterator>,
        config: EngineConfig,
    ) -> Self {
        let registry = SceneRegistry::new(store.clone(), transliterator);
        let gate = AccessGate::new(config.access_control);
        let locks = Arc::new(SceneLocks::new());
        Self {
            transition: VersionTransition::new(
                store.clone(),
                registry.clone(),
                gate,
                locks.clone(),
            ),
            retrieval: Retrieval::new(store.clone(), registry.clone()),
            history: HistoryIndex::new(store, registry.clone()),
            registry,
            gate,
            locks,
        }
    }

    /// Saves a scene's full node-set, creating the scene when the identity
    /// is absent or unknown. See [`VersionTransition`] for the sequence.
    pub async fn save(
        &self,
        request: SaveRequest,
        requester: Option<&Requester>,
    ) -> SceneResult<SaveOutcome> {
        self.transition.save(request, requester).await
    }

    /// Loads a scene's node-set, live or at an archived version.
    pub async fn load(
        &self,
        id: &SceneId,
        selector: VersionSelector,
    ) -> SceneResult<Vec<SceneNode>> {
        self.retrieval.load(id, selector).await
    }

    /// Lists a scene's versions, current first.
    pub async fn history_list(&self, id: &SceneId) -> SceneResult<Vec<HistoryEntry>> {
        self.history.history_list(id).await
    }

    /// Applies a display edit: name, thumbnail, category, public flag.
    /// Never touches the version or the collection name.
    pub async fn edit(
        &self,
        id: &SceneId,
        patch: DisplayPatch,
        requester: Option<&Requester>,
    ) -> SceneResult<()> {
        validate_scene_name(&patch.name)?;

        let lock = self.locks.lock_for(id).await;
        let _lease = lock.lock().await;

        let meta = self.registry.get(id).await?;
        self.gate.authorize_mutation(&meta.ownership, requester)?;
        self.registry.update_display(&meta, patch).await?;
        Ok(())
    }
}
