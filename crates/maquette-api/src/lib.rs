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

//! # Maquette API
//!
//! The HTTP surface over the scene persistence engine.
//!
//! Every endpoint answers with the JSON envelope `{Code, Msg, Data?}`:
//! `Code` 200 for success, 300 for any application error, always HTTP 200
//! at the transport level. Clients switch on the envelope code, not the
//! status line.

pub mod envelope;
pub mod routes;
pub mod server;

pub use envelope::ApiResponse;
pub use routes::{router, ApiContext};
pub use server::serve;
