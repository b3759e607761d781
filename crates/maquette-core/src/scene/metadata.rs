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

use crate::auth::UserId;
use crate::scene::SceneId;
use crate::store::{Fields, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who may mutate a scene.
///
/// The data set this engine manages predates per-user ownership, so a
/// registry record without an owner field is not an error: it marks a
/// legacy scene that only administrators may touch. Modeling the two cases
/// as a dedicated variant keeps that rule an explicit branch instead of an
/// implicit `Option` convention.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SceneOwnership {
    /// The scene belongs to a single user; only that user may mutate it.
    Owned(UserId),
    /// A scene created before per-user ownership, or while access control
    /// was disabled. Only administrators may mutate it.
    #[default]
    Legacy,
}

impl SceneOwnership {
    /// Returns `true` for scenes without an owner on record.
    pub fn is_legacy(&self) -> bool {
        matches!(self, SceneOwnership::Legacy)
    }

    /// Returns the owning user, if the scene has one.
    pub fn owner(&self) -> Option<&UserId> {
        match self {
            SceneOwnership::Owned(id) => Some(id),
            SceneOwnership::Legacy => None,
        }
    }
}

/// One registry record per scene.
///
/// Field names follow the persisted document layout, which is also the
/// shape the HTTP surface exposes. `collection_name` is assigned once from
/// the creation timestamp and never changes; `version` only ever advances,
/// by exactly one per successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    /// Stable external identifier, immutable after creation.
    #[serde(rename = "ID")]
    pub id: SceneId,
    /// Display name shown in the editor.
    #[serde(rename = "Name")]
    pub name: String,
    /// Full transliteration of the name, maintained for search.
    #[serde(rename = "TotalPinYin")]
    pub total_pinyin: String,
    /// First-letter transliteration of the name, maintained for search.
    #[serde(rename = "FirstPinYin")]
    pub first_pinyin: String,
    /// Name of the live collection holding the current node-set.
    #[serde(rename = "CollectionName")]
    pub collection_name: String,
    /// Current version, starting at 0 on first save.
    #[serde(rename = "Version")]
    pub version: u64,
    /// When the registry record was created.
    #[serde(rename = "CreateTime")]
    pub create_time: DateTime<Utc>,
    /// When the record was last written (save or display edit).
    #[serde(rename = "UpdateTime")]
    pub update_time: DateTime<Utc>,
    /// Path of the thumbnail image, if one has been captured.
    #[serde(rename = "Thumbnail", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Category the scene is filed under, if any.
    #[serde(rename = "CategoryID", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Whether the scene is listed publicly.
    #[serde(rename = "IsPublic", default)]
    pub is_public: bool,
    /// Mutation rights; persisted as an optional `OwnerUserID` field whose
    /// absence means [`SceneOwnership::Legacy`].
    #[serde(
        rename = "OwnerUserID",
        default,
        skip_serializing_if = "SceneOwnership::is_legacy",
        with = "ownership_field"
    )]
    pub ownership: SceneOwnership,
}

impl SceneMetadata {
    /// Name of the companion collection archiving superseded versions.
    pub fn history_collection_name(&self) -> String {
        format!("{}_history", self.collection_name)
    }

    /// Encodes the record into a store field map.
    pub fn to_fields(&self) -> StoreResult<Fields> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::Decode(
                "scene metadata did not encode to an object".to_string(),
            )),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    /// Decodes a registry record from a store field map.
    pub fn from_fields(fields: Fields) -> StoreResult<Self> {
        serde_json::from_value(serde_json::Value::Object(fields)).map_err(StoreError::from)
    }
}

mod ownership_field {
    //! Serde adapter persisting [`SceneOwnership`] as an optional user id.

    use super::SceneOwnership;
    use crate::auth::UserId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &SceneOwnership, s: S) -> Result<S::Ok, S::Error> {
        match v {
            SceneOwnership::Owned(id) => id.serialize(s),
            SceneOwnership::Legacy => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<SceneOwnership, D::Error> {
        Ok(match Option::<UserId>::deserialize(d)? {
            Some(id) => SceneOwnership::Owned(id),
            None => SceneOwnership::Legacy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ownership: SceneOwnership) -> SceneMetadata {
        SceneMetadata {
            id: SceneId::new(),
            name: "Demo".to_string(),
            total_pinyin: "demo".to_string(),
            first_pinyin: "d".to_string(),
            collection_name: "Scene20250805120000000".to_string(),
            version: 3,
            create_time: Utc::now(),
            update_time: Utc::now(),
            thumbnail: None,
            category_id: None,
            is_public: false,
            ownership,
        }
    }

    #[test]
    fn owned_scene_round_trips_through_fields() {
        let meta = sample(SceneOwnership::Owned(UserId::new("u1")));
        let fields = meta.to_fields().unwrap();
        assert!(fields.contains_key("OwnerUserID"));
        let back = SceneMetadata::from_fields(fields).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn legacy_scene_omits_owner_field() {
        let meta = sample(SceneOwnership::Legacy);
        let fields = meta.to_fields().unwrap();
        assert!(!fields.contains_key("OwnerUserID"));
        let back = SceneMetadata::from_fields(fields).unwrap();
        assert!(back.ownership.is_legacy());
    }

    #[test]
    fn history_collection_appends_suffix() {
        let meta = sample(SceneOwnership::Legacy);
        assert_eq!(
            meta.history_collection_name(),
            "Scene20250805120000000_history"
        );
    }
}
