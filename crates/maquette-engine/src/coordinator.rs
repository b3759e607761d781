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

use crate::error::{SceneError, SceneResult};
use crate::gate::AccessGate;
use crate::locks::SceneLocks;
use crate::registry::SceneRegistry;
use maquette_core::auth::Requester;
use maquette_core::naming::validate_scene_name;
use maquette_core::scene::{SceneId, SceneMetadata, SceneNode, VERSION_TAG_FIELD};
use maquette_core::store::{DocumentStore, Fields};
use serde_json::Value;
use std::sync::Arc;

/// Input to a save: the full replacement node-set for one scene.
#[derive(Debug)]
pub struct SaveRequest {
    /// Target scene. Absent, or unknown to the registry, means a new
    /// scene is created under a fresh identity.
    pub id: Option<SceneId>,
    /// Display name; validated before anything is written.
    pub name: String,
    /// The complete node-set, exactly as the editor submitted it.
    pub nodes: Vec<SceneNode>,
}

/// What a successful save produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// The scene written (fresh on the creation path).
    pub id: SceneId,
    /// The version the live collection now holds.
    pub version: u64,
}

/// Orchestrates the version transition a save performs.
///
/// For an existing scene the sequence is: authorize, archive the outgoing
/// node-set under its version tag, clear the live collection, insert the
/// submitted node-set, advance the registry. The steps are individual
/// store round trips with no transaction across them; a failure aborts
/// the remaining steps and completed steps stay as they are. The
/// per-scene lease keeps in-process writers from interleaving, and the
/// registry's compare-and-swap turns a cross-process race into a
/// [`SceneError::Conflict`].
pub struct VersionTransition {
    store: Arc<dyn DocumentStore>,
    registry: SceneRegistry,
    gate: AccessGate,
    locks: Arc<SceneLocks>,
}

impl VersionTransition {
    /// Wires the coordinator to its collaborators.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: SceneRegistry,
        gate: AccessGate,
        locks: Arc<SceneLocks>,
    ) -> Self {
        Self {
            store,
            registry,
            gate,
            locks,
        }
    }

    /// Saves a scene, creating it if the identity is absent or unknown.
    pub async fn save(
        &self,
        request: SaveRequest,
        requester: Option<&Requester>,
    ) -> SceneResult<SaveOutcome> {
        validate_scene_name(&request.name)?;

        if let Some(id) = request.id {
            let lock = self.locks.lock_for(&id).await;
            let _lease = lock.lock().await;
            match self.registry.get(&id).await {
                Ok(meta) => return self.replace_live_set(meta, request, requester).await,
                // An identity the registry has never seen falls through to
                // the creation path, under a fresh identity.
                Err(SceneError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        self.create_initial_version(request, requester).await
    }

    /// The creation path: registry record at version 0, then the node-set.
    async fn create_initial_version(
        &self,
        request: SaveRequest,
        requester: Option<&Requester>,
    ) -> SceneResult<SaveOutcome> {
        let ownership = self.gate.ownership_for_creation(requester)?;
        let meta = self.registry.create(&request.name, ownership).await?;

        let batch: Vec<Fields> = request.nodes.into_iter().map(SceneNode::into_fields).collect();
        let count = batch.len();
        self.store.insert_many(&meta.collection_name, batch).await?;

        log::debug!("scene {} created with {count} nodes at version 0", meta.id);
        Ok(SaveOutcome {
            id: meta.id,
            version: 0,
        })
    }

    /// The transition path: archive the outgoing version, replace the live
    /// set, advance the registry.
    async fn replace_live_set(
        &self,
        meta: SceneMetadata,
        request: SaveRequest,
        requester: Option<&Requester>,
    ) -> SceneResult<SaveOutcome> {
        self.gate.authorize_mutation(&meta.ownership, requester)?;

        let outgoing = meta.version;

        // Archive: the whole live set, store identifiers stripped, each
        // record tagged with the version it belonged to.
        let live = self.store.find_many(&meta.collection_name, None).await?;
        let archived_count = live.len();
        let tagged: Vec<Fields> = live
            .into_iter()
            .map(|doc| {
                let mut fields = doc.fields;
                fields.insert(VERSION_TAG_FIELD.to_string(), Value::from(outgoing));
                fields
            })
            .collect();
        self.store
            .insert_many(&meta.history_collection_name(), tagged)
            .await?;

        // Replace: clear the live collection, insert the submitted
        // node-set unmodified.
        self.store.delete_all(&meta.collection_name).await?;
        let batch: Vec<Fields> = request.nodes.into_iter().map(SceneNode::into_fields).collect();
        let incoming_count = batch.len();
        self.store.insert_many(&meta.collection_name, batch).await?;

        let version = self.registry.advance_version(&meta).await?;
        log::debug!(
            "scene {} advanced to version {version}: {archived_count} nodes archived under tag \
             {outgoing}, {incoming_count} nodes live",
            meta.id
        );
        Ok(SaveOutcome {
            id: meta.id,
            version,
        })
    }
}
