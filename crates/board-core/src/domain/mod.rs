//! 도메인 모델.
//!
//! 프로젝트 관리 백엔드의 핵심 엔티티를 정의합니다:
//! - `User` - 사용자 계정
//! - `Organization` - 조직
//! - `OrgMembership` - 조직 멤버십 (역할 포함)

pub mod org;
pub mod user;

pub use org::{OrgMembership, Organization};
pub use user::{NewUser, User};
