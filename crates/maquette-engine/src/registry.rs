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
use chrono::Utc;
use maquette_core::naming::{validate_scene_name, Transliterator};
use maquette_core::scene::{SceneId, SceneMetadata, SceneOwnership};
use maquette_core::store::{DocumentStore, Filter};
use std::sync::Arc;

/// Name of the collection holding one [`SceneMetadata`] record per scene.
pub const REGISTRY_COLLECTION: &str = "scenes";

/// Display fields a client may change without touching the node-set.
///
/// `name` is always applied (and re-validated); the optional fields are
/// applied when present and left untouched when absent.
#[derive(Debug, Clone, Default)]
pub struct DisplayPatch {
    /// New display name.
    pub name: String,
    /// New thumbnail path.
    pub thumbnail: Option<String>,
    /// New category.
    pub category_id: Option<String>,
    /// New public listing flag.
    pub is_public: Option<bool>,
}

/// Maps stable scene identities to their registry records.
///
/// Every write to the registry goes through a compare-and-swap on the
/// record's version, so a writer holding a stale view loses with a
/// [`SceneError::Conflict`] instead of silently clobbering a concurrent
/// save.
#[derive(Clone)]
pub struct SceneRegistry {
    store: Arc<dyn DocumentStore>,
    transliterator: Arc<dyn Transliterator>,
}

impl SceneRegistry {
    /// Creates a registry over the given store and transliteration
    /// collaborator.
    pub fn new(store: Arc<dyn DocumentStore>, transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            store,
            transliterator,
        }
    }

    /// Creates a fresh registry record at version 0.
    ///
    /// The live collection's name is fixed here, derived from the creation
    /// instant at nanosecond precision, and never changes for the life of
    /// the scene.
    pub async fn create(
        &self,
        name: &str,
        ownership: SceneOwnership,
    ) -> SceneResult<SceneMetadata> {
        validate_scene_name(name)?;

        let now = Utc::now();
        let keys = self.transliterator.transliterate(name);
        let meta = SceneMetadata {
            id: SceneId::new(),
            name: name.to_string(),
            total_pinyin: keys.total,
            first_pinyin: keys.first,
            collection_name: format!("Scene{}", now.format("%Y%m%d%H%M%S%9f")),
            version: 0,
            create_time: now,
            update_time: now,
            thumbnail: None,
            category_id: None,
            is_public: false,
            ownership,
        };

        self.store
            .insert_one(REGISTRY_COLLECTION, meta.to_fields()?)
            .await?;
        log::info!(
            "registered scene {} ('{}') in collection '{}'",
            meta.id,
            meta.name,
            meta.collection_name
        );
        Ok(meta)
    }

    /// Looks up a scene's registry record.
    pub async fn get(&self, id: &SceneId) -> SceneResult<SceneMetadata> {
        let filter = Filter::new().eq("ID", id.to_string());
        let doc = self
            .store
            .find_one(REGISTRY_COLLECTION, &filter)
            .await?
            .ok_or(SceneError::NotFound(*id))?;
        Ok(SceneMetadata::from_fields(doc.fields)?)
    }

    /// Applies a display edit to the record the caller read.
    ///
    /// The version is part of the write condition: if a save slipped in
    /// between the caller's read and this write, the edit fails with a
    /// conflict instead of resurrecting the older version number.
    pub async fn update_display(
        &self,
        current: &SceneMetadata,
        patch: DisplayPatch,
    ) -> SceneResult<SceneMetadata> {
        validate_scene_name(&patch.name)?;

        let keys = self.transliterator.transliterate(&patch.name);
        let mut updated = current.clone();
        updated.name = patch.name;
        updated.total_pinyin = keys.total;
        updated.first_pinyin = keys.first;
        if let Some(thumbnail) = patch.thumbnail {
            updated.thumbnail = Some(thumbnail);
        }
        if let Some(category_id) = patch.category_id {
            updated.category_id = Some(category_id);
        }
        if let Some(is_public) = patch.is_public {
            updated.is_public = is_public;
        }
        updated.update_time = Utc::now();

        self.write_replacing(current, &updated).await?;
        Ok(updated)
    }

    /// Advances a scene's version by exactly one.
    ///
    /// Invoked only by the version transition coordinator, after the new
    /// node-set has been written.
    pub async fn advance_version(&self, current: &SceneMetadata) -> SceneResult<u64> {
        let mut updated = current.clone();
        updated.version = current.version + 1;
        updated.update_time = Utc::now();

        self.write_replacing(current, &updated).await?;
        log::debug!("scene {} advanced to version {}", current.id, updated.version);
        Ok(updated.version)
    }

    /// Replaces `current`'s record with `updated`, guarded on the version
    /// the caller read.
    async fn write_replacing(
        &self,
        current: &SceneMetadata,
        updated: &SceneMetadata,
    ) -> SceneResult<()> {
        let filter = Filter::new()
            .eq("ID", current.id.to_string())
            .eq("Version", current.version);
        let matched = self
            .store
            .update_one(REGISTRY_COLLECTION, &filter, updated.to_fields()?)
            .await?;
        if matched {
            Ok(())
        } else {
            Err(SceneError::Conflict {
                scene: current.id,
                expected: current.version,
            })
        }
    }
}
