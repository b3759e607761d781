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

//! # Maquette Infra
//!
//! Concrete implementations of the external collaborators the engine
//! consumes through `maquette-core` contracts: the document store, the
//! authentication collaborator, and the transliteration collaborator.
//!
//! Everything in this crate is swappable. Production deployments replace
//! the memory store with a real database-backed implementation and the
//! token table with the session service; the engine never notices.

pub mod auth;
pub mod memory;
pub mod translit;

pub use auth::TokenTable;
pub use memory::MemoryDocumentStore;
pub use translit::NoopTransliterator;
