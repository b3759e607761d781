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

//! Scene name validation and the transliteration collaborator's contract.

use std::fmt;

/// Search keys derived from a scene name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transliteration {
    /// Full transliteration of the name (whole-syllable pinyin for Chinese
    /// display names).
    pub total: String,
    /// First-letter abbreviation of the transliteration.
    pub first: String,
}

/// Contract of the transliteration collaborator.
///
/// The registry refreshes a scene's search keys on every create and
/// display edit; producing them is someone else's job.
pub trait Transliterator: Send + Sync {
    /// Derives search keys from a display name.
    fn transliterate(&self, name: &str) -> Transliteration;
}

/// Why a scene name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// The name was empty.
    Empty,
    /// The name began with an underscore, which is reserved for internally
    /// named collections.
    Reserved,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "Scene name is not allowed to be empty."),
            NameError::Reserved => {
                write!(f, "Scene name is not allowed to start with an underscore.")
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Validates a scene display name.
///
/// Applied identically on the creation and edit paths before anything is
/// written.
pub fn validate_scene_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        Err(NameError::Empty)
    } else if name.starts_with('_') {
        Err(NameError::Reserved)
    } else {
        Ok(())
    }
}
