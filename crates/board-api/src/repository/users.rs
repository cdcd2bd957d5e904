//! 사용자 Repository.
//!
//! 사용자 조회와 생성을 위한 데이터베이스 작업을 담당합니다.
//! 인증 코어는 [`UserStore`] 트레이트만 소비하며, "사용자 없음"은
//! 에러나 제로값이 아닌 `Ok(None)`으로 표현됩니다.

use async_trait::async_trait;
use board_core::{NewUser, User};
use sqlx::PgPool;
use uuid::Uuid;

/// 저장소 인프라 장애.
///
/// 실제 인프라 문제에서만 반환되며, 조회 결과 없음은
/// `Ok(None)`으로 보고됩니다.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("데이터베이스 에러: {0}")]
    Database(#[from] sqlx::Error),
}

/// 인증 코어가 소비하는 좁은 영속성 인터페이스.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 표시 이름으로 사용자를 조회합니다.
    async fn get_by_name(&self, name: &str) -> Result<Option<User>, StoreError>;

    /// 새 사용자를 저장하고 저장된 레코드를 반환합니다.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
}

/// PostgreSQL 기반 사용자 저장소.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// 기존 연결 풀 위에 저장소를 생성합니다.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, is_super_admin, created_at, updated_at
            FROM users
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, is_super_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, name, email, password_hash, is_super_admin, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_super_admin)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}

/// 단위 테스트용 인메모리 사용자 저장소.
#[cfg(any(test, feature = "test-utils"))]
pub struct MemoryUserStore {
    users: tokio::sync::Mutex<Vec<User>>,
    /// 설정 시 모든 호출이 데이터베이스 에러로 실패
    fail: std::sync::atomic::AtomicBool,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: tokio::sync::Mutex::new(Vec::new()),
            fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// 기존 사용자를 저장소에 시딩합니다.
    pub async fn insert(&self, user: User) {
        self.users.lock().await.push(user);
    }

    /// 이후 호출을 실패시켜 저장소 장애를 시뮬레이션합니다.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail
            .store(unavailable, std::sync::atomic::Ordering::SeqCst);
    }

    /// 저장된 사용자 수.
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        self.check_available()?;
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.check_available()?;
        let created = user.into_user(Uuid::new_v4(), chrono::Utc::now());
        self.users.lock().await.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_lookup_miss_is_none() {
        let store = MemoryUserStore::new();
        let result = store.get_by_name("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_create_then_lookup() {
        let store = MemoryUserStore::new();
        let created = store
            .create(NewUser {
                name: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "hash".to_string(),
                is_super_admin: false,
            })
            .await
            .unwrap();

        let found = store.get_by_name("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(!found.id.is_nil());
    }

    #[tokio::test]
    async fn test_memory_store_unavailable() {
        let store = MemoryUserStore::new();
        store.set_unavailable(true);
        assert!(store.get_by_name("anyone").await.is_err());
    }
}
