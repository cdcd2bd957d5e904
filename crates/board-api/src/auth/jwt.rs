//! JWT 토큰 처리.
//!
//! Access Token 및 Refresh Token 생성/검증/갱신 로직.
//!
//! 모든 함수는 입력과 서명 시크릿에 대해 순수하게 동작하며
//! 저장소나 다른 외부 상태를 참조하지 않습니다.

use board_core::AuthConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Access Token 페이로드.
///
/// 사용자 식별자와 발급 시점의 권한 플래그를 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 ID
    pub sub: Uuid,
    /// 발급 시점의 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
    /// Issued At - 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// JWT ID - 토큰 고유 식별자
    pub jti: String,
}

impl Claims {
    /// 새로운 Claims 생성.
    pub fn new(user_id: Uuid, is_super_admin: bool, expires_in_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            is_super_admin,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(expires_in_minutes)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Refresh Token 페이로드.
///
/// Access Token 갱신에 사용됩니다. Access와 동일한 subject와
/// 권한 플래그를 담지만 수명이 길고 `token_type`으로 구분됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject - 사용자 ID
    pub sub: Uuid,
    /// 발급 시점의 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
    /// Issued At
    pub iat: i64,
    /// Expiration
    pub exp: i64,
    /// JWT ID
    pub jti: String,
    /// Token type (항상 "refresh")
    pub token_type: String,
}

impl RefreshClaims {
    /// 새로운 Refresh Claims 생성.
    pub fn new(user_id: Uuid, is_super_admin: bool, expires_in_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            is_super_admin,
            iat: now.timestamp(),
            exp: (now + Duration::days(expires_in_days)).timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: "refresh".to_string(),
        }
    }
}

/// Access Token + Refresh Token 페어.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenPair {
    /// Access Token
    pub access_token: String,
    /// Refresh Token
    pub refresh_token: String,
    /// Access Token 만료 시간 (초)
    pub expires_in: i64,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
}

/// 토큰 생성/검증 에러.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// nil UUID는 유효한 subject가 아님
    #[error("토큰 subject가 비어 있습니다")]
    NilSubject,
    /// 토큰 인코딩 실패
    #[error("토큰 인코딩 실패: {0}")]
    Encoding(jsonwebtoken::errors::Error),
    /// 수명이 지난 토큰
    #[error("토큰이 만료되었습니다")]
    Expired,
    /// 서명 검증 실패 (변조/위조)
    #[error("유효하지 않은 토큰")]
    Invalid,
    /// 구조적으로 파싱할 수 없는 입력
    #[error("잘못된 토큰 형식")]
    Malformed,
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::Malformed,
        _ => TokenError::Invalid,
    }
}

/// Access Token + Refresh Token 쌍 생성.
///
/// 두 토큰 모두 subject와 발급 시점의 권한 플래그를 담습니다.
///
/// # Errors
/// `user_id`가 nil UUID면 `TokenError::NilSubject`를 반환합니다.
pub fn issue_token_pair(
    user_id: Uuid,
    is_super_admin: bool,
    config: &AuthConfig,
) -> Result<TokenPair, TokenError> {
    if user_id.is_nil() {
        return Err(TokenError::NilSubject);
    }

    let access_claims = Claims::new(user_id, is_super_admin, config.access_token_minutes);
    let refresh_claims = RefreshClaims::new(user_id, is_super_admin, config.refresh_token_days);
    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());

    let access_token =
        encode(&Header::default(), &access_claims, &key).map_err(TokenError::Encoding)?;
    let refresh_token =
        encode(&Header::default(), &refresh_claims, &key).map_err(TokenError::Encoding)?;

    Ok(TokenPair {
        access_token,
        refresh_token,
        expires_in: config.access_token_minutes * 60,
        token_type: "Bearer".to_string(),
    })
}

/// Access Token 디코딩 및 검증.
///
/// 서명과 만료를 검증하고 내장된 Claims를 반환합니다.
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // 기본 60초 허용 오차 제거, 만료 시각이 지나면 즉시 거부
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(map_decode_error)
}

/// Refresh Token 디코딩 및 검증.
///
/// Access Token을 refresh 용도로 제출하면 `token_type` 불일치로
/// 거부됩니다.
pub fn decode_refresh_token(token: &str, secret: &str) -> Result<RefreshClaims, TokenError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    let claims = decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(map_decode_error)?;

    if claims.token_type != "refresh" {
        return Err(TokenError::Invalid);
    }

    Ok(claims)
}

/// Refresh Token으로 새 토큰 쌍 발급.
///
/// Refresh Token을 검증한 뒤 내장된 subject/권한 플래그 그대로
/// 새 쌍을 발급합니다. 저장소를 조회하지 않으므로 발급 이후의
/// 권한 변경은 다음 로그인까지 반영되지 않습니다.
pub fn refresh_token_pair(refresh_token: &str, config: &AuthConfig) -> Result<TokenPair, TokenError> {
    let claims = decode_refresh_token(refresh_token, &config.jwt_secret)?;
    issue_token_pair(claims.sub, claims.is_super_admin, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            access_token_minutes: 30,
            refresh_token_days: 7,
            ..Default::default()
        }
    }

    #[test]
    fn test_issue_and_decode_roundtrip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let pair = issue_token_pair(user_id, true, &config).unwrap();
        assert!(!pair.access_token.is_empty());
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 30 * 60);

        let access = decode_access_token(&pair.access_token, TEST_SECRET).unwrap();
        assert_eq!(access.sub, user_id);
        assert!(access.is_super_admin);

        let refresh = decode_refresh_token(&pair.refresh_token, TEST_SECRET).unwrap();
        assert_eq!(refresh.sub, user_id);
        assert!(refresh.is_super_admin);
        assert_eq!(refresh.token_type, "refresh");
    }

    #[test]
    fn test_issue_rejects_nil_subject() {
        let config = test_config();
        let result = issue_token_pair(Uuid::nil(), false, &config);
        assert!(matches!(result, Err(TokenError::NilSubject)));
    }

    #[test]
    fn test_expired_token_fails_with_expired() {
        let mut config = test_config();
        config.access_token_minutes = -10;

        // 만료 검증 전에 발급이 성공해야 하므로 직접 인코딩
        let claims = Claims::new(Uuid::new_v4(), false, -10);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = decode_access_token(&token, TEST_SECRET);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_just_expired_token_fails_immediately() {
        // 만료 수 초 뒤의 토큰도 허용 오차 없이 거부되어야 함
        let mut claims = Claims::new(Uuid::new_v4(), false, 30);
        claims.exp = (Utc::now() - Duration::seconds(5)).timestamp();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = decode_access_token(&token, TEST_SECRET);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_tampered_token_fails_with_invalid() {
        let config = test_config();
        let pair = issue_token_pair(Uuid::new_v4(), false, &config).unwrap();

        let result = decode_access_token(&pair.access_token, "another-secret-key-32-chars-long!!");
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_fails_with_malformed() {
        let result = decode_access_token("not-a-jwt", TEST_SECRET);
        assert!(matches!(result, Err(TokenError::Malformed)));
    }

    #[test]
    fn test_refresh_keeps_subject_and_flag() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let pair = issue_token_pair(user_id, true, &config).unwrap();
        let renewed = refresh_token_pair(&pair.refresh_token, &config).unwrap();

        let access = decode_access_token(&renewed.access_token, TEST_SECRET).unwrap();
        assert_eq!(access.sub, user_id);
        assert!(access.is_super_admin);
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let config = test_config();
        let pair = issue_token_pair(Uuid::new_v4(), false, &config).unwrap();

        // Access Token에는 token_type이 없으므로 역직렬화 실패
        let result = refresh_token_pair(&pair.access_token, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_rejects_expired_refresh_token() {
        let config = test_config();
        let claims = RefreshClaims::new(Uuid::new_v4(), false, -1);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = refresh_token_pair(&token, &config);
        assert!(matches!(result, Err(TokenError::Expired)));
    }
}
