//! 조직 및 멤버십 타입.
//!
//! 조직 생성자는 멤버십 레코드와 무관하게 해당 조직의
//! 암묵적 관리자입니다. 권한 평가기가 이 규칙을 적용할 수 있도록
//! 멤버십은 조직의 생성자 ID를 함께 들고 다닙니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 조직.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Organization {
    /// 조직 ID
    pub id: Uuid,
    /// 생성한 사용자 ID
    pub created_by: Uuid,
}

/// 조직 멤버십.
///
/// (user, organization) 쌍마다 유일합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct OrgMembership {
    /// 멤버 사용자 ID
    pub user_id: Uuid,
    /// 소속 조직 (생성자 ID 포함)
    pub org: Organization,
    /// 이 조직의 관리자 여부
    pub is_admin: bool,
}

impl OrgMembership {
    /// 새 멤버십을 생성합니다.
    pub fn new(user_id: Uuid, org: Organization, is_admin: bool) -> Self {
        Self {
            user_id,
            org,
            is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_new() {
        let org = Organization {
            id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
        };
        let user_id = Uuid::new_v4();
        let m = OrgMembership::new(user_id, org, true);
        assert_eq!(m.user_id, user_id);
        assert_eq!(m.org, org);
        assert!(m.is_admin);
    }
}
