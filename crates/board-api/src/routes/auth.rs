//! 인증 endpoint.
//!
//! 로그인, 토큰 갱신, 현재 사용자 조회 엔드포인트를 제공합니다.
//! 로그인과 갱신은 자격증명 자체를 제출하는 경로이므로 기본
//! `auth.public_paths`에 포함되어 게이트키퍼를 거치지 않습니다.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use board_core::User;

use crate::auth::{AuthError, CurrentUser, TokenError, TokenPair};
use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// 로그인 요청.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    /// 사용자 이름
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// 비밀번호
    #[validate(length(min = 1))]
    pub password: String,
}

/// API 응답용 사용자 표현.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// 사용자 ID
    pub id: Uuid,
    /// 표시 이름
    pub name: String,
    /// 이메일 주소
    pub email: String,
    /// 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
    /// 생성 시각 (Unix timestamp)
    pub created_at: i64,
    /// 수정 시각 (Unix timestamp)
    pub updated_at: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_super_admin: user.is_super_admin,
            created_at: user.created_at.timestamp(),
            updated_at: user.updated_at.timestamp(),
        }
    }
}

/// 로그인 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    /// 인증된 사용자
    pub user: UserResponse,
    /// 발급된 토큰 쌍
    pub token: TokenPair,
}

/// 토큰 갱신 요청.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefreshRequest {
    /// Refresh Token
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// 토큰 갱신 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshResponse {
    /// 새로 발급된 토큰 쌍
    pub token: TokenPair,
}

/// 현재 사용자 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponse {
    /// 사용자 ID (토큰 subject)
    pub user_id: Uuid,
    /// 발급 시점의 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
}

fn error_response(err: &AuthError) -> (StatusCode, Json<ApiErrorResponse>) {
    let (status, code) = match err {
        AuthError::UserNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
        AuthError::InvalidCredential => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIAL"),
        AuthError::Store(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
        AuthError::Token(TokenError::Expired) => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED"),
        AuthError::Token(TokenError::Malformed) => (StatusCode::BAD_REQUEST, "TOKEN_MALFORMED"),
        AuthError::Token(TokenError::Invalid) => (StatusCode::UNAUTHORIZED, "TOKEN_INVALID"),
        AuthError::Token(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
    };
    (status, Json(ApiErrorResponse::new(code, err.to_string())))
}

fn validation_error(err: &validator::ValidationErrors) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse::new("INVALID_INPUT", err.to_string())),
    )
}

/// 로그인.
///
/// POST /api/v1/auth/sign-in
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "로그인 성공", body = SignInResponse),
        (status = 400, description = "잘못된 입력", body = ApiErrorResponse),
        (status = 401, description = "비밀번호 불일치", body = ApiErrorResponse),
        (status = 404, description = "사용자 없음", body = ApiErrorResponse),
        (status = 503, description = "저장소 장애", body = ApiErrorResponse),
    )
)]
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, (StatusCode, Json<ApiErrorResponse>)> {
    request.validate().map_err(|e| validation_error(&e))?;

    let outcome = state
        .auth
        .sign_in(&request.name, &request.password)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(SignInResponse {
        user: UserResponse::from(&outcome.user),
        token: outcome.token,
    }))
}

/// 토큰 갱신.
///
/// POST /api/v1/auth/refresh
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = "auth",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "갱신 성공", body = RefreshResponse),
        (status = 400, description = "형식 오류 토큰", body = ApiErrorResponse),
        (status = 401, description = "만료 또는 무효 토큰", body = ApiErrorResponse),
    )
)]
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, (StatusCode, Json<ApiErrorResponse>)> {
    request.validate().map_err(|e| validation_error(&e))?;

    let token = state
        .auth
        .refresh(&request.refresh_token)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(RefreshResponse { token }))
}

/// 현재 사용자 조회.
///
/// 게이트키퍼가 검증해 extension에 넣은 신원을 반환합니다.
/// GET /api/v1/me
#[utoipa::path(
    get,
    path = "/api/v1/me",
    tag = "auth",
    responses(
        (status = 200, description = "검증된 신원", body = MeResponse),
        (status = 401, description = "인증 필요", body = ApiErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn me(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    Json(MeResponse {
        user_id: user.user_id,
        is_super_admin: user.is_super_admin,
    })
}

/// 인증 라우터 생성.
pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/refresh", post(refresh_token))
}

/// 현재 사용자 라우터 생성.
pub fn me_router() -> Router<Arc<AppState>> {
    Router::new().route("/me", get(me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::repository::UserStore;
    use crate::state::create_test_state;
    use axum::body::Body;
    use axum::http::{header, Request};
    use board_core::NewUser;
    use tower::ServiceExt;

    async fn app_with_user(name: &str, pass: &str) -> Router {
        let (state, store) = create_test_state();
        store
            .create(NewUser {
                name: name.to_string(),
                email: format!("{name}@example.com"),
                password_hash: hash_password(pass).unwrap(),
                is_super_admin: false,
            })
            .await
            .unwrap();

        Router::new()
            .nest("/api/v1/auth", auth_router())
            .with_state(state)
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let app = app_with_user("alice", "secret-pw-1").await;

        let response = app
            .oneshot(json_post(
                "/api/v1/auth/sign-in",
                serde_json::json!({"name": "alice", "password": "secret-pw-1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: SignInResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.user.name, "alice");
        assert!(!parsed.token.access_token.is_empty());
        assert!(!parsed.token.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user_returns_404() {
        let app = app_with_user("alice", "secret-pw-1").await;

        let response = app
            .oneshot(json_post(
                "/api/v1/auth/sign-in",
                serde_json::json!({"name": "nobody", "password": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.code, "USER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_returns_401() {
        let app = app_with_user("alice", "secret-pw-1").await;

        let response = app
            .oneshot(json_post(
                "/api/v1/auth/sign-in",
                serde_json::json!({"name": "alice", "password": "wrong"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sign_in_empty_name_returns_400() {
        let app = app_with_user("alice", "secret-pw-1").await;

        let response = app
            .oneshot(json_post(
                "/api/v1/auth/sign-in",
                serde_json::json!({"name": "", "password": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_refresh_roundtrip() {
        let app = app_with_user("alice", "secret-pw-1").await;

        let response = app
            .clone()
            .oneshot(json_post(
                "/api/v1/auth/sign-in",
                serde_json::json!({"name": "alice", "password": "secret-pw-1"}),
            ))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let signed_in: SignInResponse = serde_json::from_slice(&body).unwrap();

        let response = app
            .oneshot(json_post(
                "/api/v1/auth/refresh",
                serde_json::json!({"refresh_token": signed_in.token.refresh_token}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let renewed: RefreshResponse = serde_json::from_slice(&body).unwrap();
        assert!(!renewed.token.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_malformed_token_returns_400() {
        let app = app_with_user("alice", "secret-pw-1").await;

        let response = app
            .oneshot(json_post(
                "/api/v1/auth/refresh",
                serde_json::json!({"refresh_token": "not-a-jwt"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.code, "TOKEN_MALFORMED");
    }
}
