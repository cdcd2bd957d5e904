//! 라우트 게이트키퍼 미들웨어.
//!
//! 예외 경로(헬스 체크 등)를 제외한 모든 요청에 대해 Bearer 토큰을
//! 검증하고, 검증된 신원을 request extension으로 다운스트림 핸들러에
//! 전달합니다.
//!
//! 토큰 실패의 종류(만료/변조/형식 오류)는 디버그 로그로만 구분하고
//! 호출자에게는 항상 동일한 401 응답을 돌려줍니다. 검증 내부를
//! 외부에 노출하지 않기 위함입니다.

use std::collections::HashSet;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use board_core::AuthConfig;
use tracing::debug;
use uuid::Uuid;

use super::jwt::decode_access_token;
use crate::error::ApiErrorResponse;

/// 게이트키퍼 상태.
///
/// 서명 시크릿과 예외 경로 집합의 스냅샷. 요청 간 공유되며
/// 가변 상태가 없으므로 동시 호출에 안전합니다.
#[derive(Debug, Clone)]
pub struct AuthGate {
    secret: String,
    public_paths: HashSet<String>,
}

impl AuthGate {
    /// 인증 설정에서 게이트를 생성합니다.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            public_paths: config.public_paths.iter().cloned().collect(),
        }
    }

    /// 경로가 인증 예외인지 확인합니다.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(path)
    }
}

/// 게이트키퍼가 검증한 호출자 신원.
///
/// 다운스트림 핸들러는 [`CurrentUser`] 추출기로 읽습니다.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// 사용자 ID (토큰 subject)
    pub user_id: Uuid,
    /// 발급 시점의 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorResponse::new(
            "UNAUTHENTICATED",
            "authentication required",
        )),
    )
        .into_response()
}

/// 인증 게이트키퍼 미들웨어.
///
/// 1. 예외 경로는 무조건 통과
/// 2. Bearer 토큰 부재 시 401
/// 3. 토큰 검증 실패 시 401 (종류 무관, 디버그 로그로만 구분)
/// 4. 성공 시 `AuthenticatedUser`를 extension에 넣고 진행
pub async fn auth_middleware(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Response {
    if gate.is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let Some(token) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
    else {
        debug!(path = %request.uri().path(), "Request rejected: missing bearer token");
        return unauthenticated();
    };

    match decode_access_token(token, &gate.secret) {
        Ok(claims) => {
            request.extensions_mut().insert(AuthenticatedUser {
                user_id: claims.sub,
                is_super_admin: claims.is_super_admin,
            });
            next.run(request).await
        }
        Err(e) => {
            debug!(path = %request.uri().path(), error = %e, "Request rejected: token verification failed");
            unauthenticated()
        }
    }
}

/// 검증된 호출자 신원 추출기.
///
/// 게이트키퍼가 extension에 넣은 [`AuthenticatedUser`]를 읽습니다.
/// 게이트를 거치지 않은 라우트에서 사용하면 401을 반환합니다.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(CurrentUser)
            .ok_or_else(unauthenticated)
    }
}
