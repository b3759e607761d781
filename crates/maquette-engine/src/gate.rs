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

use crate::error::{SceneError, SceneResult};
use maquette_core::auth::Requester;
use maquette_core::scene::SceneOwnership;

/// Ownership and role checks gating every mutation.
///
/// The rules split on the scene's ownership variant:
/// - an owned scene may only be mutated by its owner; administrators get
///   no override;
/// - a legacy scene (no owner on record) may only be mutated by an
///   administrator.
///
/// With access control disabled the gate is a no-op and everything
/// passes.
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    enabled: bool,
}

impl AccessGate {
    /// Creates a gate; `enabled = false` makes every check pass.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether ownership checks are active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Checks mutation rights on an existing scene.
    pub fn authorize_mutation(
        &self,
        ownership: &SceneOwnership,
        requester: Option<&Requester>,
    ) -> SceneResult<()> {
        if !self.enabled {
            return Ok(());
        }
        let allowed = match ownership {
            SceneOwnership::Owned(owner) => requester.is_some_and(|r| &r.id == owner),
            SceneOwnership::Legacy => requester.is_some_and(|r| r.role.is_administrator()),
        };
        if allowed {
            Ok(())
        } else {
            Err(SceneError::PermissionDenied)
        }
    }

    /// Determines the ownership a newly created scene is born with.
    ///
    /// Anonymous creation is only possible while access control is
    /// disabled; such scenes land as [`SceneOwnership::Legacy`], exactly
    /// like the pre-ownership data set.
    pub fn ownership_for_creation(
        &self,
        requester: Option<&Requester>,
    ) -> SceneResult<SceneOwnership> {
        if !self.enabled {
            return Ok(SceneOwnership::Legacy);
        }
        match requester {
            Some(r) => Ok(SceneOwnership::Owned(r.id.clone())),
            None => Err(SceneError::PermissionDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maquette_core::auth::UserId;

    fn owner() -> Requester {
        Requester::new("u1", "User")
    }

    fn admin() -> Requester {
        Requester::new("root", "Administrator")
    }

    #[test]
    fn disabled_gate_passes_everything() {
        let gate = AccessGate::new(false);
        let owned = SceneOwnership::Owned(UserId::new("u1"));
        assert!(gate.authorize_mutation(&owned, None).is_ok());
        assert!(gate
            .authorize_mutation(&SceneOwnership::Legacy, None)
            .is_ok());
        assert_eq!(
            gate.ownership_for_creation(None).unwrap(),
            SceneOwnership::Legacy
        );
    }

    #[test]
    fn owned_scene_admits_only_its_owner() {
        let gate = AccessGate::new(true);
        let owned = SceneOwnership::Owned(UserId::new("u1"));

        assert!(gate.authorize_mutation(&owned, Some(&owner())).is_ok());
        // Administrators do not override ownership.
        assert!(matches!(
            gate.authorize_mutation(&owned, Some(&admin())),
            Err(SceneError::PermissionDenied)
        ));
        assert!(matches!(
            gate.authorize_mutation(&owned, None),
            Err(SceneError::PermissionDenied)
        ));
    }

    #[test]
    fn legacy_scene_admits_only_administrators() {
        let gate = AccessGate::new(true);

        assert!(gate
            .authorize_mutation(&SceneOwnership::Legacy, Some(&admin()))
            .is_ok());
        assert!(matches!(
            gate.authorize_mutation(&SceneOwnership::Legacy, Some(&owner())),
            Err(SceneError::PermissionDenied)
        ));
    }

    #[test]
    fn creation_binds_ownership_to_requester() {
        let gate = AccessGate::new(true);
        assert_eq!(
            gate.ownership_for_creation(Some(&owner())).unwrap(),
            SceneOwnership::Owned(UserId::new("u1"))
        );
        assert!(matches!(
            gate.ownership_for_creation(None),
            Err(SceneError::PermissionDenied)
        ));
    }
}
