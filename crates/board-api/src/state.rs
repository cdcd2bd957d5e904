//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! `AppState`는 Arc로 래핑되어 여러 요청 간에 안전하게 공유되며
//! Axum의 State extractor를 통해 핸들러에 주입됩니다.

use std::sync::Arc;

use board_core::AppConfig;
use chrono::{DateTime, Utc};

use crate::auth::AuthService;
use crate::repository::UserStore;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 애플리케이션 설정
    pub config: Arc<AppConfig>,

    /// 인증 서비스 - 로그인, 토큰 갱신
    pub auth: AuthService,

    /// 사용자 저장소 어댑터
    pub store: Arc<dyn UserStore>,

    /// 데이터베이스 연결 풀 (헬스 체크용)
    pub db_pool: Option<sqlx::PgPool>,

    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새 애플리케이션 상태를 생성합니다.
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Self {
        let auth = AuthService::new(store.clone(), config.auth.clone());
        Self {
            config: Arc::new(config),
            auth,
            store,
            db_pool: None,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 데이터베이스 연결 풀을 설정합니다.
    pub fn with_db_pool(mut self, pool: sqlx::PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// 서버 기동 후 경과 시간(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

/// 테스트용 애플리케이션 상태 생성.
///
/// 인메모리 저장소와 고정 시크릿을 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> (Arc<AppState>, Arc<crate::repository::MemoryUserStore>) {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "test-secret-key-for-jwt-testing-minimum-32-chars".to_string();

    let store = Arc::new(crate::repository::MemoryUserStore::new());
    let state = AppState::new(config, store.clone());
    (Arc::new(state), store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_test_state() {
        let (state, store) = create_test_state();
        assert!(state.db_pool.is_none());
        assert_eq!(store.len().await, 0);
        assert!(state.uptime_secs() >= 0);
    }
}
