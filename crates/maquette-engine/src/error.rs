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

//! The engine's operational error taxonomy.

use maquette_core::naming::NameError;
use maquette_core::scene::SceneId;
use maquette_core::store::StoreError;
use thiserror::Error;

/// Convenience alias for engine operation results.
pub type SceneResult<T> = Result<T, SceneError>;

/// Everything that can go wrong inside a scene operation.
///
/// Validation and permission failures happen before anything is written.
/// A store failure aborts the operation at that step; completed steps are
/// not rolled back and nothing is retried.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Request input failed validation.
    #[error("{0}")]
    Validation(String),

    /// No registry record exists for the scene.
    #[error("Scene {0} does not exist.")]
    NotFound(SceneId),

    /// The requester may not mutate this scene.
    #[error("Permission denied")]
    PermissionDenied,

    /// A compare-and-swap registry write found the record already moved.
    /// Another writer won the race; the caller's view is stale.
    #[error("Scene {scene} was modified concurrently (expected version {expected}).")]
    Conflict {
        /// The contested scene.
        scene: SceneId,
        /// The version the loser expected to still be current.
        expected: u64,
    },

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<NameError> for SceneError {
    fn from(err: NameError) -> Self {
        SceneError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_displays_exact_message() {
        assert_eq!(format!("{}", SceneError::PermissionDenied), "Permission denied");
    }

    #[test]
    fn name_errors_become_validation() {
        let err = SceneError::from(NameError::Empty);
        assert!(matches!(err, SceneError::Validation(_)));
        assert_eq!(format!("{err}"), "Scene name is not allowed to be empty.");
    }

    #[test]
    fn store_errors_pass_through_display() {
        let err = SceneError::from(StoreError::Backend("boom".to_string()));
        assert_eq!(format!("{err}"), "Store operation failed: boom");
    }
}
