//! 버전 조회 endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::AppState;

/// 버전 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    /// 서비스 이름
    pub name: String,
    /// API 버전
    pub version: String,
}

/// 빌드 버전 조회.
///
/// GET /api/v1/version
#[utoipa::path(
    get,
    path = "/api/v1/version",
    tag = "general",
    responses(
        (status = 200, description = "버전 정보", body = VersionResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_version(State(state): State<Arc<AppState>>) -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: state.version.clone(),
    })
}

/// 버전 라우터 생성.
pub fn version_router() -> Router<Arc<AppState>> {
    Router::new().route("/version", get(get_version))
}
