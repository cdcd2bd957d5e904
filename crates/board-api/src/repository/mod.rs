//! 데이터베이스 작업을 위한 Repository 패턴.
//!
//! 데이터베이스 접근 로직을 인증 코어와 라우트 핸들러에서 분리하여
//! 관리합니다. 인증 코어는 `UserStore` 트레이트만 소비하므로
//! 저장소 구현을 교체할 수 있습니다.

pub mod users;

pub use users::{PgUserStore, StoreError, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use users::MemoryUserStore;
