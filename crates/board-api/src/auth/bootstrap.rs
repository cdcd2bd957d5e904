//! 기본 관리자 계정 부트스트랩.
//!
//! 프로세스 시작 시 한 번 실행되어 `admin` 계정이 정확히 하나
//! 존재하도록 보장합니다. 서버가 비예외 경로를 서빙하기 전에
//! 완료되어야 하며, 저장소 에러는 시작 실패로 이어집니다.

use board_core::NewUser;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::password::{self, PasswordError};
use crate::repository::{StoreError, UserStore};

/// 기본 관리자 이름.
pub const ADMIN_NAME: &str = "admin";
/// 기본 관리자 이메일.
pub const ADMIN_EMAIL: &str = "admin@taskboard.dev";
/// 기본 관리자 초기 비밀번호. 최초 로그인 후 변경해야 합니다.
const ADMIN_INITIAL_PASSWORD: &str = "admin";

/// 부트스트랩 에러. 프로세스 시작을 중단시킵니다.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("저장소를 사용할 수 없습니다: {0}")]
    Store(#[from] StoreError),
    #[error("관리자 비밀번호 해싱 실패: {0}")]
    Password(#[from] PasswordError),
}

/// `admin` 계정이 존재하도록 보장합니다.
///
/// 조회 결과가 없으면 슈퍼 관리자 플래그가 설정된 계정을 생성하고
/// `true`를, 이미 있으면 아무것도 하지 않고 `false`를 반환합니다.
/// 재시작을 거듭해도 중복 생성은 일어나지 않습니다.
///
/// # Errors
/// 조회 또는 생성 중 저장소 에러가 나면 그대로 전파합니다.
pub async fn ensure_default_admin(store: &dyn UserStore) -> Result<bool, BootstrapError> {
    if store.get_by_name(ADMIN_NAME).await?.is_some() {
        info!("Default admin account already exists, skipping bootstrap");
        return Ok(false);
    }

    let admin = store
        .create(NewUser {
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            password_hash: password::hash_password(ADMIN_INITIAL_PASSWORD)?,
            is_super_admin: true,
        })
        .await?;

    info!(user_id = %admin.id, "Default admin account created");
    warn!("Default admin password is in effect; change it after first sign-in");

    Ok(true)
}

static BOOTSTRAP_GUARD: OnceCell<()> = OnceCell::const_new();

/// 설정 게이트와 1회 실행 보장이 적용된 부트스트랩 진입점.
///
/// `enabled`가 거짓이면 아무것도 하지 않습니다. 프로세스당 최대
/// 한 번만 [`ensure_default_admin`]을 실행하므로, 이중 시작 같은
/// 반복 초기화 시도가 관리자 계정을 두 개 만드는 경쟁을 일으킬 수
/// 없습니다.
pub async fn run_bootstrap(store: &dyn UserStore, enabled: bool) -> Result<(), BootstrapError> {
    if !enabled {
        return Ok(());
    }

    BOOTSTRAP_GUARD
        .get_or_try_init(|| async {
            ensure_default_admin(store).await?;
            Ok::<(), BootstrapError>(())
        })
        .await?;

    Ok(())
}
