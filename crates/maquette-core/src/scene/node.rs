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

use crate::store::Fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the integer field tagging archived records with the version they
/// belonged to when superseded. Part of the persisted history layout.
pub const VERSION_TAG_FIELD: &str = "VersionTag";

/// One element of a scene's node-set.
///
/// A node is whatever JSON object the editor submitted (a mesh, a
/// material, a light, a camera), carrying its own generator/type tag. The
/// engine treats nodes as opaque field maps to move between the live
/// collection and the history archive; it never interprets their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneNode(Fields);

impl SceneNode {
    /// Wraps a raw field map as a node.
    pub fn from_fields(fields: Fields) -> Self {
        Self(fields)
    }

    /// Unwraps the node into its raw field map.
    pub fn into_fields(self) -> Fields {
        self.0
    }

    /// Borrows the node's field map.
    pub fn fields(&self) -> &Fields {
        &self.0
    }

    /// Reads a single field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Fields> for SceneNode {
    fn from(fields: Fields) -> Self {
        Self::from_fields(fields)
    }
}
