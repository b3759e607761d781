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

use std::fmt;

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;

/// An error surfaced by a [`DocumentStore`](crate::store::DocumentStore)
/// backend.
///
/// Store failures abort the operation that hit them; the engine never
/// retries and never rolls back steps that already completed.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying storage rejected or failed an operation.
    Backend(String),
    /// A stored document did not decode into the shape the caller expected.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "Store operation failed: {msg}"),
            StoreError::Decode(msg) => write!(f, "Stored document is malformed: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let err = StoreError::Backend("connection reset".to_string());
        assert_eq!(format!("{err}"), "Store operation failed: connection reset");
    }

    #[test]
    fn json_errors_convert_to_decode() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
