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

//! The scene data model: stable identities, registry metadata, and the
//! opaque nodes a scene is made of.
//!
//! A scene in Maquette is a named, versioned 3D composition. The types in
//! this module form the contract between the persistence engine and its
//! storage: [`SceneMetadata`] is the registry record that tracks a scene
//! through its life, [`SceneNode`] is one element of its node-set, and
//! [`SceneOwnership`] makes the mutation rules an explicit, testable branch.

mod id;
mod metadata;
mod node;

pub use id::SceneId;
pub use metadata::{SceneMetadata, SceneOwnership};
pub use node::{SceneNode, VERSION_TAG_FIELD};
