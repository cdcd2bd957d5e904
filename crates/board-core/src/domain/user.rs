//! 사용자 계정 타입.
//!
//! 이 모듈은 사용자 엔티티와 생성 입력 타입을 정의합니다.
//! 저장소 조회는 `Option<User>`를 반환하므로 "사용자 없음"은
//! 에러나 제로값이 아닌 명시적 부재로 표현됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 계정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct User {
    /// 사용자 ID
    pub id: Uuid,
    /// 표시 이름 (로그인 이름, 전역 유일)
    pub name: String,
    /// 이메일 주소
    pub email: String,
    /// Argon2 PHC 형식 비밀번호 해시
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 수정 시각
    pub updated_at: DateTime<Utc>,
}

/// 사용자 생성 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// 표시 이름
    pub name: String,
    /// 이메일 주소
    pub email: String,
    /// Argon2 PHC 형식 비밀번호 해시
    pub password_hash: String,
    /// 전역 슈퍼 관리자 여부
    pub is_super_admin: bool,
}

impl NewUser {
    /// 저장소가 ID와 타임스탬프를 채운 `User`를 생성합니다.
    pub fn into_user(self, id: Uuid, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            is_super_admin: self.is_super_admin,
            created_at: now,
            updated_at: now,
        }
    }
}
