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

use async_trait::async_trait;
use maquette_core::store::{
    Document, DocumentId, DocumentStore, Fields, Filter, StoreError, StoreResult,
};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory document store using RwLock<HashMap>
///
/// Collections spring into existence on first insert and are kept as plain
/// vectors in insertion order, which is all the ordering the store contract
/// promises. Reads take the shared lock, writes the exclusive one.
///
/// This backend holds nothing across restarts. It exists for development
/// and for the engine's test suites; deployments swap in a real
/// database-backed implementation of the same trait.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// The number of documents currently held in `collection`.
    pub fn collection_len(&self, collection: &str) -> usize {
        if let Ok(collections) = self.collections.read() {
            collections.get(collection).map_or(0, Vec::len)
        } else {
            0
        }
    }

    /// Names of all collections that have ever received an insert.
    pub fn collection_names(&self) -> Vec<String> {
        if let Ok(collections) = self.collections.read() {
            collections.keys().cloned().collect()
        } else {
            Vec::new()
        }
    }
}

impl MemoryDocumentStore {
    fn read_lock(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .read()
            .map_err(|_| StoreError::Backend("Failed to acquire read lock".to_string()))
    }

    fn write_lock(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .write()
            .map_err(|_| StoreError::Backend("Failed to acquire write lock".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let collections = self.read_lock()?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(&doc.fields)))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Option<&Filter>,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.read_lock()?;
        let docs = match collections.get(collection) {
            Some(docs) => docs,
            None => return Ok(Vec::new()),
        };
        Ok(match filter {
            Some(filter) => docs
                .iter()
                .filter(|doc| filter.matches(&doc.fields))
                .cloned()
                .collect(),
            None => docs.clone(),
        })
    }

    async fn insert_one(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId> {
        let mut collections = self.write_lock()?;
        if !collections.contains_key(collection) {
            log::debug!("creating collection '{collection}'");
        }
        let doc = Document::new(fields);
        let id = doc.id;
        collections.entry(collection.to_string()).or_default().push(doc);
        Ok(id)
    }

    async fn insert_many(
        &self,
        collection: &str,
        batch: Vec<Fields>,
    ) -> StoreResult<Vec<DocumentId>> {
        let mut collections = self.write_lock()?;
        if !collections.contains_key(collection) {
            log::debug!("creating collection '{collection}'");
        }
        let docs = collections.entry(collection.to_string()).or_default();
        docs.reserve(batch.len());
        let mut ids = Vec::with_capacity(batch.len());
        for fields in batch {
            let doc = Document::new(fields);
            ids.push(doc.id);
            docs.push(doc);
        }
        Ok(ids)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        fields: Fields,
    ) -> StoreResult<bool> {
        let mut collections = self.write_lock()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter_mut().find(|doc| filter.matches(&doc.fields)) {
            Some(doc) => {
                doc.fields = fields;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self, collection: &str) -> StoreResult<u64> {
        let mut collections = self.write_lock()?;
        let removed = collections
            .get_mut(collection)
            .map_or(0, |docs| std::mem::take(docs).len());
        Ok(removed as u64)
    }
}
