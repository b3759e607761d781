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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The field map of a document: ordered JSON keys to JSON values.
///
/// Insertion order is preserved through round trips so node payloads come
/// back the way the editor submitted them.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A store-assigned document identifier.
///
/// Identifiers are version 7 UUIDs, so the instant the document was written
/// is embedded in the identifier itself. The history listing leans on this:
/// archived records carry no separate timestamp field, their write time is
/// recovered from the identifier via [`DocumentId::timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generates a fresh identifier stamped with the current instant.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parses an identifier from its canonical hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    /// Recovers the creation instant embedded in the identifier.
    ///
    /// `None` for identifiers that carry no timestamp (foreign UUID
    /// versions fed in through [`DocumentId::parse`]).
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let (secs, nanos) = self.0.get_timestamp()?.to_unix();
        DateTime::from_timestamp(secs as i64, nanos)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single record in a named collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned identity. Never part of `fields`.
    pub id: DocumentId,
    /// The caller-provided payload.
    pub fields: Fields,
}

impl Document {
    /// Pairs a freshly generated identifier with the given payload.
    pub fn new(fields: Fields) -> Self {
        Self {
            id: DocumentId::generate(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_a_timestamp() {
        let before = Utc::now();
        let id = DocumentId::generate();
        let ts = id.timestamp().expect("v7 ids embed a timestamp");
        // Millisecond precision, so allow a small window either side.
        assert!(ts >= before - chrono::Duration::seconds(1));
        assert!(ts <= Utc::now() + chrono::Duration::seconds(1));
    }

    #[test]
    fn generated_ids_are_monotonically_sortable() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert!(a < b || a.timestamp() == b.timestamp());
    }

    #[test]
    fn parse_round_trips_display() {
        let id = DocumentId::generate();
        assert_eq!(DocumentId::parse(&id.to_string()).unwrap(), id);
    }
}
