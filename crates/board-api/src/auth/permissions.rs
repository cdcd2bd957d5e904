//! 조직 권한 평가.
//!
//! 이미 조회된 멤버십 스냅샷 위에서 동작하는 순수 함수들입니다.
//! I/O가 없으므로 잠금이나 동기화가 필요하지 않습니다.
//!
//! 평가 순서는 고정되어 있습니다:
//! 1. 전역 슈퍼 관리자
//! 2. 조직 생성자 (멤버십 레코드와 무관한 암묵적 관리자)
//! 3. 명시적 멤버십 플래그

use board_core::{OrgMembership, User};

/// 사용자가 조직 관리자인지 평가합니다.
///
/// 슈퍼 관리자와 조직 생성자는 명시적 플래그보다 우선합니다.
/// 첫 번째로 만족하는 멤버십에서 단락 평가합니다.
pub fn is_org_admin(memberships: &[OrgMembership], user: &User) -> bool {
    if user.is_super_admin {
        return true;
    }
    for m in memberships {
        if m.org.created_by == user.id {
            return true;
        }
        if m.user_id == user.id && m.is_admin {
            return true;
        }
    }
    false
}

/// 사용자가 조직 멤버인지 평가합니다.
///
/// 관리자 여부와 무관하게 멤버십 레코드가 있으면 참입니다.
pub fn is_org_member(memberships: &[OrgMembership], user: &User) -> bool {
    if user.is_super_admin {
        return true;
    }
    for m in memberships {
        if m.org.created_by == user.id {
            return true;
        }
        if m.user_id == user.id {
            return true;
        }
    }
    false
}
