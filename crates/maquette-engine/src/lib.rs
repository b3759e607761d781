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

//! # Maquette Engine
//!
//! The versioned scene persistence engine. A scene's node-set lives in a
//! per-scene live collection; every save archives the outgoing node-set
//! into the companion history collection, tagged with the version it
//! belonged to, then replaces the live set and advances the registry.
//!
//! The engine deliberately replaces the full node-set on save instead of
//! diffing: clients always submit the complete scene graph and scene
//! graphs are bounded in size, so the trade buys trivial retrieval at the
//! cost of storage. The replacement is isolated behind
//! [`VersionTransition`] so a diff protocol could be substituted without
//! touching the save/load contract.
//!
//! There is no cross-step transaction in the document store. Mutations are
//! therefore serialized per scene through an in-process write lease, and
//! every registry write is a compare-and-swap on the version, so a race
//! lost to another process fails with a visible [`SceneError::Conflict`]
//! instead of corrupting history.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod gate;
pub mod history;
pub mod locks;
pub mod registry;
pub mod retrieval;
pub mod service;

pub use config::EngineConfig;
pub use coordinator::{SaveOutcome, SaveRequest, VersionTransition};
pub use error::{SceneError, SceneResult};
pub use gate::AccessGate;
pub use history::HistoryEntry;
pub use registry::{DisplayPatch, SceneRegistry};
pub use retrieval::VersionSelector;
pub use service::SceneService;
