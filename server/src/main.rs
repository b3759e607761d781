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

//! Standalone scene persistence server.
//!
//! Wires the engine to its development collaborators (the in-memory
//! document store, the token table, the pass-through transliterator)
//! and serves the scene API. Deployments swap the collaborators for
//! their production implementations at these construction sites.

use anyhow::{Context, Result};
use maquette_api::{serve, ApiContext};
use maquette_engine::{EngineConfig, SceneService};
use maquette_infra::{MemoryDocumentStore, NoopTransliterator, TokenTable};
use std::net::SocketAddr;
use std::sync::Arc;

/// Environment-driven server settings.
#[derive(Debug, Clone)]
struct ServerConfig {
    /// Socket to bind, from `MAQUETTE_ADDR`.
    addr: SocketAddr,
    /// Whether ownership checks gate mutations, from
    /// `MAQUETTE_ACCESS_CONTROL` ("1" or "true").
    access_control: bool,
}

impl ServerConfig {
    fn from_env() -> Result<Self> {
        let addr = std::env::var("MAQUETTE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("MAQUETTE_ADDR is not a socket address: '{addr}'"))?;

        let access_control = std::env::var("MAQUETTE_ACCESS_CONTROL")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            addr,
            access_control,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;
    log::info!(
        "starting maquette server on {} (access control {})",
        config.addr,
        if config.access_control { "on" } else { "off" }
    );

    let store = Arc::new(MemoryDocumentStore::new());
    log::warn!("using the in-memory document store; nothing survives a restart");

    let scenes = SceneService::new(
        store,
        Arc::new(NoopTransliterator::new()),
        EngineConfig {
            access_control: config.access_control,
        },
    );
    let ctx = Arc::new(ApiContext {
        scenes,
        auth: Arc::new(TokenTable::new()),
    });

    serve(config.addr, ctx).await
}
