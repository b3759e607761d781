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

use crate::routes::{router, ApiContext};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Binds the scene API and serves until the process is stopped.
///
/// Binding failures are the one fatal error in the system; everything
/// after this point is recovered per request and answered through the
/// envelope.
pub async fn serve(addr: SocketAddr, ctx: Arc<ApiContext>) -> Result<()> {
    let app = router(ctx);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!("scene API listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
