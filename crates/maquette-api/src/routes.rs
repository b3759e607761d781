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

use crate::envelope::ApiResponse;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use maquette_core::auth::{Authenticator, Requester};
use maquette_core::scene::{SceneId, SceneNode};
use maquette_engine::{DisplayPatch, SaveRequest, SceneService, VersionSelector};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Header carrying the requester's bearer token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Shared state behind every handler.
pub struct ApiContext {
    /// The persistence engine.
    pub scenes: SceneService,
    /// The authentication collaborator.
    pub auth: Arc<dyn Authenticator>,
}

/// Builds the scene API router.
pub fn router(ctx: Arc<ApiContext>) -> Router {
    Router::new()
        .route("/api/Scene/Load", get(load))
        .route("/api/Scene/HistoryList", get(history_list))
        .route("/api/Scene/Save", post(save))
        .route("/api/Scene/Edit", post(edit))
        .with_state(ctx)
}

/// Resolves the requester behind a request, if any.
fn requester(ctx: &ApiContext, headers: &HeaderMap) -> Option<Requester> {
    let token = headers.get(AUTH_TOKEN_HEADER)?.to_str().ok()?;
    let requester = ctx.auth.user_for_token(token);
    if requester.is_none() {
        log::debug!("request carried an unknown auth token");
    }
    requester
}

fn parse_scene_id(raw: &str) -> Result<SceneId, ApiResponse> {
    SceneId::parse(raw).map_err(|_| ApiResponse::error("Scene ID is invalid."))
}

#[derive(Debug, Deserialize)]
struct LoadParams {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Version")]
    version: Option<i64>,
}

async fn load(
    State(ctx): State<Arc<ApiContext>>,
    Query(params): Query<LoadParams>,
) -> Json<ApiResponse> {
    let id = match parse_scene_id(&params.id) {
        Ok(id) => id,
        Err(resp) => return Json(resp),
    };
    let selector = VersionSelector::from_wire(params.version);
    match ctx.scenes.load(&id, selector).await {
        Ok(nodes) => Json(ApiResponse::ok_with("OK", &nodes)),
        Err(e) => Json(ApiResponse::from(e)),
    }
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    #[serde(rename = "ID")]
    id: String,
}

async fn history_list(
    State(ctx): State<Arc<ApiContext>>,
    Query(params): Query<HistoryParams>,
) -> Json<ApiResponse> {
    let id = match parse_scene_id(&params.id) {
        Ok(id) => id,
        Err(resp) => return Json(resp),
    };
    match ctx.scenes.history_list(&id).await {
        Ok(entries) => Json(ApiResponse::ok_with("OK", &entries)),
        Err(e) => Json(ApiResponse::from(e)),
    }
}

#[derive(Debug, Deserialize)]
struct SaveForm {
    #[serde(rename = "ID")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    /// JSON-encoded array of scene nodes.
    #[serde(rename = "Data")]
    data: Option<String>,
}

async fn save(
    State(ctx): State<Arc<ApiContext>>,
    headers: HeaderMap,
    Form(form): Form<SaveForm>,
) -> Json<ApiResponse> {
    let requester = requester(&ctx, &headers);

    let Some(name) = form.name else {
        return Json(ApiResponse::error("Name is required."));
    };
    let id = match form.id.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => match parse_scene_id(raw) {
            Ok(id) => Some(id),
            Err(resp) => return Json(resp),
        },
        None => None,
    };
    let nodes: Vec<SceneNode> = match form.data.as_deref() {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(nodes) => nodes,
            Err(e) => return Json(ApiResponse::error(format!("Scene data is invalid: {e}"))),
        },
        None => return Json(ApiResponse::error("Data is required.")),
    };

    let request = SaveRequest { id, name, nodes };
    match ctx.scenes.save(request, requester.as_ref()).await {
        Ok(outcome) => Json(ApiResponse::ok_with(
            "Saved successfully.",
            &json!({"ID": outcome.id.to_string(), "Version": outcome.version}),
        )),
        Err(e) => Json(ApiResponse::from(e)),
    }
}

#[derive(Debug, Deserialize)]
struct EditForm {
    #[serde(rename = "ID")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    /// Thumbnail path.
    #[serde(rename = "Image")]
    image: Option<String>,
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "IsPublic")]
    is_public: Option<bool>,
}

async fn edit(
    State(ctx): State<Arc<ApiContext>>,
    headers: HeaderMap,
    Form(form): Form<EditForm>,
) -> Json<ApiResponse> {
    let requester = requester(&ctx, &headers);

    let Some(raw_id) = form.id else {
        return Json(ApiResponse::error("ID is required."));
    };
    let id = match parse_scene_id(&raw_id) {
        Ok(id) => id,
        Err(resp) => return Json(resp),
    };
    let Some(name) = form.name else {
        return Json(ApiResponse::error("Name is required."));
    };

    let patch = DisplayPatch {
        name,
        thumbnail: form.image,
        category_id: form.category,
        is_public: form.is_public,
    };
    match ctx.scenes.edit(&id, patch, requester.as_ref()).await {
        Ok(()) => Json(ApiResponse::ok("Saved successfully.")),
        Err(e) => Json(ApiResponse::from(e)),
    }
}
