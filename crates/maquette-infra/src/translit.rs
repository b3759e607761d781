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

use maquette_core::naming::{Transliteration, Transliterator};

/// Pass-through transliteration.
///
/// Uses the lowercased name as the full key and its first character as the
/// abbreviation. Good enough for Latin-script names in development; the
/// production pinyin collaborator replaces this for Chinese display names.
#[derive(Debug, Default)]
pub struct NoopTransliterator;

impl NoopTransliterator {
    /// Creates the pass-through transliterator.
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for NoopTransliterator {
    fn transliterate(&self, name: &str) -> Transliteration {
        let total = name.to_lowercase();
        let first = total.chars().next().map(String::from).unwrap_or_default();
        Transliteration { total, first }
    }
}
