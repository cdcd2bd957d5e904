//! 프로젝트 관리 백엔드의 에러 타입.
//!
//! 이 모듈은 서비스 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 서비스 에러.
#[derive(Debug, Error)]
pub enum BoardError {
    /// 설정 에러. 프로세스 시작을 중단시킵니다.
    #[error("설정 에러: {0}")]
    Config(String),
}

impl From<config::ConfigError> for BoardError {
    fn from(err: config::ConfigError) -> Self {
        BoardError::Config(err.to_string())
    }
}
