//! REST API 서버 및 인증 코어.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - JWT 인증 (Access/Refresh 토큰 발급·검증·갱신)
//! - 라우트 게이트키퍼 (헬스 체크 제외 전 요청 인증)
//! - 조직 권한 평가 (관리자/멤버)
//! - 기본 관리자 계정 부트스트랩
//! - Axum 기반 REST API
//!
//! # 모듈 구성
//!
//! - [`auth`]: 인증 및 권한 부여 코어
//! - [`repository`]: 사용자 저장소 어댑터
//! - [`routes`]: REST API 엔드포인트
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`error`]: 통합 API 에러 응답
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

pub use auth::{
    auth_middleware, ensure_default_admin, is_org_admin, is_org_member, run_bootstrap, AuthError,
    AuthGate, AuthService, AuthenticatedUser, Claims, CurrentUser, TokenError, TokenPair,
};
pub use error::ApiErrorResponse;
pub use repository::{PgUserStore, StoreError, UserStore};
pub use routes::create_api_router;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
