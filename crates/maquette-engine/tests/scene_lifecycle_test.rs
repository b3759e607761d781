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

use maquette_core::scene::SceneNode;
use maquette_core::store::DocumentStore;
use maquette_engine::{
    DisplayPatch, EngineConfig, SaveRequest, SceneError, SceneService, VersionSelector,
};
use maquette_infra::{MemoryDocumentStore, NoopTransliterator};
use std::sync::Arc;

fn service() -> (SceneService, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    let service = SceneService::new(
        store.clone(),
        Arc::new(NoopTransliterator::new()),
        EngineConfig::default(),
    );
    (service, store)
}

fn node(name: &str) -> SceneNode {
    serde_json::from_value(serde_json::json!({
        "Generator": "MeshSerializer",
        "Name": name,
    }))
    .unwrap()
}

fn save_request(id: Option<maquette_core::SceneId>, names: &[&str]) -> SaveRequest {
    SaveRequest {
        id,
        name: "Demo".to_string(),
        nodes: names.iter().map(|n| node(n)).collect(),
    }
}

/// Sorted node names, for membership comparison without relying on store
/// ordering.
fn names(nodes: &[SceneNode]) -> Vec<String> {
    let mut names: Vec<String> = nodes
        .iter()
        .map(|n| n.get("Name").and_then(|v| v.as_str()).unwrap().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_first_save_creates_scene_at_version_zero() {
    let (service, _store) = service();

    let outcome = service
        .save(save_request(None, &["a", "b"]), None)
        .await
        .unwrap();
    assert_eq!(outcome.version, 0);

    let live = service
        .load(&outcome.id, VersionSelector::Latest)
        .await
        .unwrap();
    assert_eq!(names(&live), vec!["a", "b"]);

    let history = service.history_list(&outcome.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].version, 0);
    assert!(history[0].is_new);
}

#[tokio::test]
async fn test_save_archives_outgoing_version() {
    // Scenario: save [a, b], then replace with [a, c].
    let (service, _store) = service();

    let created = service
        .save(save_request(None, &["a", "b"]), None)
        .await
        .unwrap();
    let advanced = service
        .save(save_request(Some(created.id), &["a", "c"]), None)
        .await
        .unwrap();

    assert_eq!(advanced.id, created.id);
    assert_eq!(advanced.version, 1);

    // Live set is the new payload, archived set is the superseded one.
    let live = service
        .load(&created.id, VersionSelector::Latest)
        .await
        .unwrap();
    assert_eq!(names(&live), vec!["a", "c"]);

    let archived = service
        .load(&created.id, VersionSelector::At(0))
        .await
        .unwrap();
    assert_eq!(names(&archived), vec!["a", "b"]);

    // Archived nodes come back plain: the tag is an archive detail.
    for n in &archived {
        assert!(n.get("VersionTag").is_none());
    }
}

#[tokio::test]
async fn test_every_archived_version_stays_retrievable() {
    let (service, _store) = service();

    let created = service
        .save(save_request(None, &["v0"]), None)
        .await
        .unwrap();
    service
        .save(save_request(Some(created.id), &["v1a", "v1b"]), None)
        .await
        .unwrap();
    service
        .save(save_request(Some(created.id), &["v2"]), None)
        .await
        .unwrap();

    assert_eq!(
        names(&service.load(&created.id, VersionSelector::At(0)).await.unwrap()),
        vec!["v0"]
    );
    assert_eq!(
        names(&service.load(&created.id, VersionSelector::At(1)).await.unwrap()),
        vec!["v1a", "v1b"]
    );
    assert_eq!(
        names(&service.load(&created.id, VersionSelector::Latest).await.unwrap()),
        vec!["v2"]
    );
}

#[tokio::test]
async fn test_unarchived_version_loads_as_empty_set() {
    let (service, _store) = service();

    let created = service
        .save(save_request(None, &["a"]), None)
        .await
        .unwrap();
    service
        .save(save_request(Some(created.id), &["b"]), None)
        .await
        .unwrap();

    // Far beyond anything saved: empty, not an error.
    let too_high = service
        .load(&created.id, VersionSelector::At(99))
        .await
        .unwrap();
    assert!(too_high.is_empty());

    // The current live version is not in the archive either.
    let current = service
        .load(&created.id, VersionSelector::At(1))
        .await
        .unwrap();
    assert!(current.is_empty());
}

#[tokio::test]
async fn test_unknown_scene_is_not_found() {
    let (service, _store) = service();
    let ghost = maquette_core::SceneId::new();

    assert!(matches!(
        service.load(&ghost, VersionSelector::Latest).await,
        Err(SceneError::NotFound(_))
    ));
    assert!(matches!(
        service.history_list(&ghost).await,
        Err(SceneError::NotFound(_))
    ));
    assert!(matches!(
        service
            .edit(
                &ghost,
                DisplayPatch {
                    name: "Renamed".to_string(),
                    ..Default::default()
                },
                None,
            )
            .await,
        Err(SceneError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_save_under_unknown_identity_creates_fresh_scene() {
    let (service, _store) = service();
    let ghost = maquette_core::SceneId::new();

    let outcome = service
        .save(save_request(Some(ghost), &["a"]), None)
        .await
        .unwrap();

    // The unknown identity is not adopted; a fresh one is assigned.
    assert_ne!(outcome.id, ghost);
    assert_eq!(outcome.version, 0);
}

#[tokio::test]
async fn test_history_list_is_dense_and_descending() {
    let (service, _store) = service();

    let created = service
        .save(save_request(None, &["v0"]), None)
        .await
        .unwrap();
    service
        .save(save_request(Some(created.id), &["v1"]), None)
        .await
        .unwrap();
    service
        .save(save_request(Some(created.id), &["v2"]), None)
        .await
        .unwrap();

    let history = service.history_list(&created.id).await.unwrap();
    assert_eq!(history.len(), 3);

    let versions: Vec<u64> = history.iter().map(|e| e.version).collect();
    assert_eq!(versions, vec![2, 1, 0]);

    assert!(history[0].is_new);
    assert!(!history[1].is_new);
    assert!(!history[2].is_new);

    // The head row is the scene itself; archived rows point at archive
    // records and their write time is recovered from those identifiers.
    assert_eq!(history[0].id, created.id.to_string());
    assert_ne!(history[1].id, created.id.to_string());
    for entry in &history[1..] {
        assert!(entry.update_time >= entry.create_time - chrono::Duration::seconds(1));
    }
    // Older versions were archived earlier.
    assert!(history[1].update_time >= history[2].update_time);
}

#[tokio::test]
async fn test_edit_changes_display_fields_only() {
    let (service, store) = service();

    let created = service
        .save(save_request(None, &["a"]), None)
        .await
        .unwrap();
    service
        .save(save_request(Some(created.id), &["b"]), None)
        .await
        .unwrap();

    for _ in 0..3 {
        service
            .edit(
                &created.id,
                DisplayPatch {
                    name: "Showroom".to_string(),
                    thumbnail: Some("/img/thumb.png".to_string()),
                    category_id: Some("interiors".to_string()),
                    is_public: Some(true),
                },
                None,
            )
            .await
            .unwrap();
    }

    let history = service.history_list(&created.id).await.unwrap();
    assert_eq!(history[0].version, 1, "edits must not advance the version");

    // The node-set is untouched.
    let live = service
        .load(&created.id, VersionSelector::Latest)
        .await
        .unwrap();
    assert_eq!(names(&live), vec!["b"]);

    // Exactly one registry record, one live collection, one archive.
    let registry = store.find_many("scenes", None).await.unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry[0].fields.get("Name").and_then(|v| v.as_str()),
        Some("Showroom")
    );
}

#[tokio::test]
async fn test_rejected_name_leaves_state_untouched() {
    let (service, store) = service();

    let created = service
        .save(save_request(None, &["a"]), None)
        .await
        .unwrap();

    for bad in ["", "_reserved"] {
        let err = service
            .save(
                SaveRequest {
                    id: Some(created.id),
                    name: bad.to_string(),
                    nodes: vec![node("x")],
                },
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SceneError::Validation(_)));

        let err = service
            .edit(
                &created.id,
                DisplayPatch {
                    name: bad.to_string(),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SceneError::Validation(_)));
    }

    // Nothing moved: still version 0, same single node, no archive rows.
    let live = service
        .load(&created.id, VersionSelector::Latest)
        .await
        .unwrap();
    assert_eq!(names(&live), vec!["a"]);

    let history = service.history_list(&created.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].version, 0);

    let registry = store.find_many("scenes", None).await.unwrap();
    assert_eq!(
        registry[0].fields.get("Name").and_then(|v| v.as_str()),
        Some("Demo")
    );
}

#[tokio::test]
async fn test_saves_on_different_scenes_are_independent() {
    let (service, _store) = service();

    let first = service
        .save(save_request(None, &["red"]), None)
        .await
        .unwrap();
    let second = service
        .save(save_request(None, &["blue"]), None)
        .await
        .unwrap();

    service
        .save(save_request(Some(first.id), &["red2"]), None)
        .await
        .unwrap();

    assert_eq!(
        names(&service.load(&first.id, VersionSelector::Latest).await.unwrap()),
        vec!["red2"]
    );
    assert_eq!(
        names(&service.load(&second.id, VersionSelector::Latest).await.unwrap()),
        vec!["blue"]
    );
    assert_eq!(service.history_list(&second.id).await.unwrap().len(), 1);
}
