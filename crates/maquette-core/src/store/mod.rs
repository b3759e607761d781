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

//! The generic document store contract the engine persists through.
//!
//! Everything the engine knows about storage is in this module: named
//! collections of [`Document`]s, equality-[`Filter`]ed lookups, bulk
//! inserts, a replace-style conditional update, and collection truncation.
//! Concrete backends live in `maquette-infra`; the engine only ever holds
//! an `Arc<dyn DocumentStore>` handed to it at construction time.

mod document;
mod error;
mod filter;

pub use document::{Document, DocumentId, Fields};
pub use error::{StoreError, StoreResult};
pub use filter::Filter;

use async_trait::async_trait;
use std::fmt::Debug;

/// Collection-oriented storage: the contract every backend implements.
///
/// The update primitive is a conditional replace: `update_one` only writes
/// when a document matches the filter, and reports whether one did. Callers
/// build compare-and-swap semantics out of that by including the fields
/// they expect to be unchanged in the filter.
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug + 'static {
    /// Returns the first document in `collection` matching `filter`.
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// Returns every document in `collection` matching `filter`, or the
    /// whole collection when no filter is given. Ordering follows the
    /// backend's storage order; callers must not rely on it.
    async fn find_many(
        &self,
        collection: &str,
        filter: Option<&Filter>,
    ) -> StoreResult<Vec<Document>>;

    /// Inserts one field map, returning the store-assigned identifier.
    async fn insert_one(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId>;

    /// Bulk-inserts a batch of field maps, returning the store-assigned
    /// identifiers in batch order.
    async fn insert_many(
        &self,
        collection: &str,
        batch: Vec<Fields>,
    ) -> StoreResult<Vec<DocumentId>>;

    /// Replaces the fields of the first document matching `filter`.
    /// Returns `false` when nothing matched (and nothing was written).
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        fields: Fields,
    ) -> StoreResult<bool>;

    /// Deletes every document in `collection`, returning how many went.
    async fn delete_all(&self, collection: &str) -> StoreResult<u64>;
}
