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

use maquette_core::auth::{Authenticator, Requester};
use std::collections::HashMap;
use std::sync::RwLock;

/// A fixed token-to-requester table.
///
/// Stands in for the session service during development and in tests:
/// tokens are registered up front and resolved with a plain map lookup.
/// Real deployments implement [`Authenticator`] against the login service
/// instead.
#[derive(Default)]
pub struct TokenTable {
    tokens: RwLock<HashMap<String, Requester>>,
}

impl TokenTable {
    /// Creates an empty table; every token resolves to anonymous.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` as belonging to `requester`.
    pub fn register(&self, token: impl Into<String>, requester: Requester) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), requester);
        }
    }
}

impl Authenticator for TokenTable {
    fn user_for_token(&self, token: &str) -> Option<Requester> {
        self.tokens.read().ok()?.get(token).cloned()
    }
}
