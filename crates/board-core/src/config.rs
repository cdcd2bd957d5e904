//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 데이터베이스 설정
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 인증 설정
    #[serde(default)]
    pub auth: AuthConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

impl ServerConfig {
    /// 소켓 주소 문자열을 반환합니다.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 연결 URL (`DATABASE_URL` 환경변수로 오버라이드 가능)
    #[serde(default)]
    pub url: Option<String>,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 타임아웃 (초)
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            connection_timeout_secs: 30,
        }
    }
}

/// 인증 설정.
///
/// 토큰 서명 시크릿, 토큰 수명, 인증 예외 경로,
/// 기본 관리자 생성 여부를 포함합니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT 서명 시크릿 (`BOARD__AUTH__JWT_SECRET`으로 설정)
    pub jwt_secret: String,
    /// Access Token 수명 (분)
    pub access_token_minutes: i64,
    /// Refresh Token 수명 (일)
    pub refresh_token_days: i64,
    /// 인증 없이 접근 가능한 경로 목록 (헬스 체크 등)
    pub public_paths: Vec<String>,
    /// 시작 시 기본 관리자 계정 생성 여부
    pub bootstrap_admin: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            access_token_minutes: 30,
            refresh_token_days: 7,
            public_paths: vec![
                "/health".to_string(),
                "/api/v1/auth/sign-in".to_string(),
                "/api/v1/auth/refresh".to_string(),
            ],
            bootstrap_admin: false,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 우선순위: 기본값 < 설정 파일 < `BOARD__` 접두사 환경변수.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // 파일에서 로드 (없으면 무시)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("BOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }

    /// 설정이 서비스 구동에 충분한지 검증합니다.
    ///
    /// # Errors
    /// JWT 시크릿이 비어 있으면 에러를 반환합니다.
    pub fn validate(&self) -> Result<(), crate::error::BoardError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(crate::error::BoardError::Config(
                "auth.jwt_secret is empty; set BOARD__AUTH__JWT_SECRET".to_string(),
            ));
        }
        if self.auth.access_token_minutes <= 0 || self.auth.refresh_token_days <= 0 {
            return Err(crate::error::BoardError::Config(
                "token lifetimes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.access_token_minutes, 30);
        assert_eq!(config.auth.refresh_token_days, 7);
        assert!(config.auth.public_paths.contains(&"/health".to_string()));
        assert!(config
            .auth
            .public_paths
            .contains(&"/api/v1/auth/sign-in".to_string()));
        assert!(!config.auth.bootstrap_admin);
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "test-secret-key-minimum-32-characters!!".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_lifetime() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "test-secret-key-minimum-32-characters!!".to_string();
        config.auth.access_token_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }
}
