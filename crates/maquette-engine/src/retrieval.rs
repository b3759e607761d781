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
use maquette_core::scene::{SceneId, SceneNode, VERSION_TAG_FIELD};
use maquette_core::store::{DocumentStore, Filter};
use std::sync::Arc;

/// Which snapshot of a scene to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionSelector {
    /// The live node-set of the current version.
    #[default]
    Latest,
    /// The archived node-set tagged with this version.
    At(u64),
}

impl VersionSelector {
    /// Interprets the wire encoding: an absent or negative version number
    /// selects the live set.
    pub fn from_wire(version: Option<i64>) -> Self {
        match version {
            Some(v) if v >= 0 => VersionSelector::At(v as u64),
            _ => VersionSelector::Latest,
        }
    }
}

/// Serves a scene's node-set, live or archived.
pub struct Retrieval {
    store: Arc<dyn DocumentStore>,
    registry: SceneRegistry,
}

impl Retrieval {
    /// Wires retrieval to the store and registry.
    pub fn new(store: Arc<dyn DocumentStore>, registry: SceneRegistry) -> Self {
        Self { store, registry }
    }

    /// Loads a scene's node-set.
    ///
    /// The live set comes back as stored, snapshot semantics, no ordering
    /// guarantee beyond the store's own. An archived load strips the
    /// version tag so both paths return plain nodes.
    ///
    /// A version that was never archived (higher than anything saved, or
    /// equal to the current live version) yields an empty set, not an
    /// error: the archive holds no records under that tag, and the store
    /// cannot distinguish "never existed" from "was empty".
    pub async fn load(
        &self,
        id: &SceneId,
        selector: VersionSelector,
    ) -> SceneResult<Vec<SceneNode>> {
        let meta = self.registry.get(id).await?;
        match selector {
            VersionSelector::Latest => {
                let docs = self.store.find_many(&meta.collection_name, None).await?;
                log::debug!("scene {id}: loaded {} live nodes", docs.len());
                Ok(docs
                    .into_iter()
                    .map(|doc| SceneNode::from_fields(doc.fields))
                    .collect())
            }
            VersionSelector::At(version) => {
                let filter = Filter::new().eq(VERSION_TAG_FIELD, version);
                let docs = self
                    .store
                    .find_many(&meta.history_collection_name(), Some(&filter))
                    .await?;
                log::debug!("scene {id}: loaded {} nodes at version {version}", docs.len());
                Ok(docs
                    .into_iter()
                    .map(|doc| {
                        let mut fields = doc.fields;
                        fields.remove(VERSION_TAG_FIELD);
                        SceneNode::from_fields(fields)
                    })
                    .collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding_of_version_selector() {
        assert_eq!(VersionSelector::from_wire(None), VersionSelector::Latest);
        assert_eq!(VersionSelector::from_wire(Some(-1)), VersionSelector::Latest);
        assert_eq!(VersionSelector::from_wire(Some(0)), VersionSelector::At(0));
        assert_eq!(VersionSelector::from_wire(Some(7)), VersionSelector::At(7));
    }
}
