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

use crate::error::SceneResult;
use crate::registry::SceneRegistry;
use chrono::{DateTime, Utc};
use maquette_core::scene::{SceneId, VERSION_TAG_FIELD};
use maquette_core::store::{DocumentId, DocumentStore};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One row of a scene's version history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The scene id for the live row; the representative archived
    /// record's identifier for archived rows.
    #[serde(rename = "ID")]
    pub id: String,
    /// The version this row describes.
    #[serde(rename = "Version")]
    pub version: u64,
    /// `true` only on the synthesized row for the current live version.
    #[serde(rename = "IsNew")]
    pub is_new: bool,
    /// When the scene was created.
    #[serde(rename = "CreateTime")]
    pub create_time: DateTime<Utc>,
    /// When this version was written. For archived rows this is recovered
    /// from the creation instant embedded in the representative record's
    /// store-assigned identifier; archived records carry no timestamp
    /// field of their own.
    #[serde(rename = "UpdateTime")]
    pub update_time: DateTime<Utc>,
}

/// Builds the version listing for a scene.
pub struct HistoryIndex {
    store: Arc<dyn DocumentStore>,
    registry: SceneRegistry,
}

impl HistoryIndex {
    /// Wires the index to the store and registry.
    pub fn new(store: Arc<dyn DocumentStore>, registry: SceneRegistry) -> Self {
        Self { store, registry }
    }

    /// Lists a scene's versions, current first, then every archived
    /// version in descending order.
    pub async fn history_list(&self, id: &SceneId) -> SceneResult<Vec<HistoryEntry>> {
        let meta = self.registry.get(id).await?;

        let mut entries = vec![HistoryEntry {
            id: meta.id.to_string(),
            version: meta.version,
            is_new: true,
            create_time: meta.create_time,
            update_time: meta.update_time,
        }];

        // One row per distinct version tag; the representative record is
        // the earliest-written one under that tag.
        let docs = self
            .store
            .find_many(&meta.history_collection_name(), None)
            .await?;
        let mut representatives: BTreeMap<u64, DocumentId> = BTreeMap::new();
        for doc in docs {
            let tag = match doc.fields.get(VERSION_TAG_FIELD).and_then(Value::as_u64) {
                Some(tag) => tag,
                None => {
                    log::warn!(
                        "scene {id}: history record {} carries no version tag, skipping",
                        doc.id
                    );
                    continue;
                }
            };
            representatives
                .entry(tag)
                .and_modify(|rep| {
                    if doc.id < *rep {
                        *rep = doc.id;
                    }
                })
                .or_insert(doc.id);
        }

        for (version, rep) in representatives.into_iter().rev() {
            entries.push(HistoryEntry {
                id: rep.to_string(),
                version,
                is_new: false,
                create_time: meta.create_time,
                update_time: rep.timestamp().unwrap_or(meta.update_time),
            });
        }

        Ok(entries)
    }
}
