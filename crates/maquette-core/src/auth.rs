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

//! The authentication collaborator's contract.
//!
//! Session issuance, login, and user administration live in another
//! service. This engine only ever asks who is behind a token, and bases
//! its ownership checks on the answer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps a raw user identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The coarse role the authentication collaborator attaches to a requester.
///
/// The engine only distinguishes administrators from everyone else; any
/// role name it does not recognize collapses to [`Role::Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May mutate legacy scenes that have no owner on record.
    Administrator,
    /// Any other authenticated user.
    Member,
}

impl Role {
    /// Maps the collaborator's role name onto the roles the engine knows.
    pub fn from_name(name: &str) -> Self {
        if name == "Administrator" {
            Role::Administrator
        } else {
            Role::Member
        }
    }

    /// Whether this role carries administrator rights.
    pub fn is_administrator(self) -> bool {
        matches!(self, Role::Administrator)
    }
}

/// The identity attached to an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    /// The authenticated user.
    pub id: UserId,
    /// The user's role.
    pub role: Role,
}

impl Requester {
    /// Builds a requester from the collaborator's raw answer.
    pub fn new(id: impl Into<String>, role_name: &str) -> Self {
        Self {
            id: UserId::new(id),
            role: Role::from_name(role_name),
        }
    }
}

/// Contract of the authentication collaborator.
pub trait Authenticator: Send + Sync {
    /// Resolves a bearer token to the requester it belongs to, or `None`
    /// for an unknown, anonymous, or expired token.
    fn user_for_token(&self, token: &str) -> Option<Requester>;
}
