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
use serde_json::Value;

/// A conjunction of field equality conditions.
///
/// This is deliberately the whole query language. Every lookup the engine
/// performs is either "all documents" or "documents whose fields equal
/// these values", and the conditional update only ever guards on equality,
/// which is exactly what a compare-and-swap needs.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Creates an empty filter, matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality condition, returning the extended filter.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// The conditions in insertion order.
    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    /// Whether a document's field map satisfies every condition.
    pub fn matches(&self, fields: &Fields) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| fields.get(field) == Some(value))
    }
}
