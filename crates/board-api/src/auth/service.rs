//! 로그인 및 토큰 갱신 서비스.
//!
//! 저장소 어댑터와 토큰 서비스를 묶어 인증 코어의 외부 표면을
//! 제공합니다. 실패 시 재시도하지 않으며 저장소 에러는 즉시
//! 호출자에게 전파됩니다.

use std::sync::Arc;

use board_core::{AuthConfig, User};
use tracing::{debug, info};

use super::jwt::{self, TokenError, TokenPair};
use super::password;
use crate::repository::{StoreError, UserStore};

/// 인증 서비스 에러.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// 해당 이름의 사용자가 없음 (저장소 에러와 구분됨)
    #[error("사용자를 찾을 수 없습니다")]
    UserNotFound,
    /// 비밀번호 불일치
    #[error("잘못된 인증 정보")]
    InvalidCredential,
    /// 저장소 인프라 장애
    #[error("저장소를 사용할 수 없습니다: {0}")]
    Store(#[from] StoreError),
    /// 토큰 생성/검증 실패
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// 로그인 성공 결과.
#[derive(Debug)]
pub struct SignInOutcome {
    /// 인증된 사용자
    pub user: User,
    /// 발급된 토큰 쌍
    pub token: TokenPair,
}

/// 인증 서비스.
///
/// 동시 호출에 안전합니다. 내부 가변 상태가 없으며 저장소 어댑터와
/// 설정 스냅샷만 보유합니다.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl AuthService {
    /// 새 인증 서비스를 생성합니다.
    pub fn new(store: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// 이름과 비밀번호로 로그인합니다.
    ///
    /// # Errors
    /// - `UserNotFound`: 이름에 해당하는 사용자가 없음
    /// - `InvalidCredential`: 비밀번호 불일치
    /// - `Store`: 저장소 조회 자체가 실패
    pub async fn sign_in(&self, name: &str, pass: &str) -> Result<SignInOutcome, AuthError> {
        let user = self
            .store
            .get_by_name(name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if password::verify_password(pass, &user.password_hash).is_err() {
            debug!(name = %name, "Sign-in rejected: password mismatch");
            return Err(AuthError::InvalidCredential);
        }

        let token = jwt::issue_token_pair(user.id, user.is_super_admin, &self.config)?;
        info!(user_id = %user.id, "User signed in");

        Ok(SignInOutcome { user, token })
    }

    /// Refresh Token으로 새 토큰 쌍을 발급합니다.
    ///
    /// 토큰에 내장된 subject/권한 플래그를 그대로 사용하며
    /// 저장소를 조회하지 않습니다.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let token = jwt::refresh_token_pair(refresh_token, &self.config)?;
        Ok(token)
    }

    /// 인증 설정에 대한 참조를 반환합니다.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
