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

//! Engine configuration.

/// Tunables handed to [`SceneService`](crate::SceneService) at
/// construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Whether ownership checks gate Save and Edit. Disabled by default
    /// for development setups; the server binary enables it from the
    /// environment.
    pub access_control: bool,
}

impl EngineConfig {
    /// Configuration with ownership checks switched on.
    pub fn with_access_control() -> Self {
        Self {
            access_control: true,
        }
    }
}
