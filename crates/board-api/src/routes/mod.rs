//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (인증 예외)
//! - `/api/v1/auth/sign-in` - 로그인
//! - `/api/v1/auth/refresh` - 토큰 갱신
//! - `/api/v1/me` - 현재 사용자 조회
//! - `/api/v1/version` - 빌드 버전

pub mod auth;
pub mod health;
pub mod version;

pub use auth::{
    auth_router, me_router, MeResponse, RefreshRequest, RefreshResponse, SignInRequest,
    SignInResponse, UserResponse,
};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use version::{version_router, VersionResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
/// 게이트키퍼 미들웨어는 호출 측(main)에서 전체에 적용합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // API v1 엔드포인트
        .nest("/api/v1/auth", auth_router())
        .nest("/api/v1", me_router().merge(version_router()))
}
