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

use maquette_engine::SceneError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope code for success.
pub const CODE_OK: u16 = 200;
/// Envelope code for any application error.
pub const CODE_ERROR: u16 = 300;

/// The JSON envelope every endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// 200 on success, 300 on application errors.
    #[serde(rename = "Code")]
    pub code: u16,
    /// Human-readable outcome message.
    #[serde(rename = "Msg")]
    pub msg: String,
    /// Endpoint-specific payload, absent when there is none.
    #[serde(rename = "Data", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// A success envelope without a payload.
    pub fn ok(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_OK,
            msg: msg.into(),
            data: None,
        }
    }

    /// A success envelope carrying a payload.
    ///
    /// A payload that fails to encode turns into an error envelope; that
    /// only happens for data with non-string map keys, which none of the
    /// engine's types produce.
    pub fn ok_with<T: Serialize>(msg: impl Into<String>, data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                code: CODE_OK,
                msg: msg.into(),
                data: Some(value),
            },
            Err(e) => Self::error(format!("Failed to encode response: {e}")),
        }
    }

    /// An application error envelope.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_ERROR,
            msg: msg.into(),
            data: None,
        }
    }
}

impl From<SceneError> for ApiResponse {
    fn from(err: SceneError) -> Self {
        ApiResponse::error(err.to_string())
    }
}
