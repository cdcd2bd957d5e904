//! 인증 및 권한 부여 코어.
//!
//! # 구성 요소
//!
//! - [`jwt`]: 토큰 발급/검증/갱신 (Access + Refresh 쌍)
//! - [`service`]: 로그인 및 토큰 갱신 표면 ([`AuthService`])
//! - [`middleware`]: 라우트 게이트키퍼 ([`auth_middleware`])
//! - [`permissions`]: 조직 역할 평가 (순수 함수)
//! - [`bootstrap`]: 기본 관리자 계정 1회 생성
//! - [`password`]: Argon2 비밀번호 해싱
//!
//! # 동시성
//!
//! 토큰 발급/검증과 게이트키퍼는 입력과 고정된 서명 시크릿에 대한
//! 순수 연산이므로 잠금 없이 동시 호출에 안전합니다. 부트스트랩만
//! 순서 요구사항(서버 시작 전 완료, 프로세스당 1회)을 가집니다.

pub mod bootstrap;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod permissions;
pub mod service;

pub use bootstrap::{ensure_default_admin, run_bootstrap, BootstrapError};
pub use jwt::{
    decode_access_token, decode_refresh_token, issue_token_pair, refresh_token_pair, Claims,
    RefreshClaims, TokenError, TokenPair,
};
pub use middleware::{auth_middleware, AuthGate, AuthenticatedUser, CurrentUser};
pub use password::{hash_password, verify_password, PasswordError};
pub use permissions::{is_org_admin, is_org_member};
pub use service::{AuthError, AuthService, SignInOutcome};
