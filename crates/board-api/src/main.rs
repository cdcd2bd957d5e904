//! 프로젝트 관리 백엔드 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다. 설정 로드, 데이터베이스
//! 연결, 기본 관리자 부트스트랩을 마친 뒤에야 리스닝을 시작하므로
//! 비예외 경로가 서빙되기 전에 부트스트랩 완료가 보장됩니다.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{middleware, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use board_api::auth::{auth_middleware, run_bootstrap, AuthGate};
use board_api::openapi::swagger_ui;
use board_api::repository::PgUserStore;
use board_api::routes::create_api_router;
use board_api::state::AppState;
use board_core::{init_logging, AppConfig, LogConfig};

/// CORS 미들웨어 구성.
///
/// `CORS_ORIGINS` 환경변수가 설정되어 있으면 해당 origin만 허용하고,
/// 설정되지 않으면 개발 모드로 간주하여 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new().allow_origin(allow_origin)
}

/// 전체 라우터 구성.
///
/// 게이트키퍼는 API 라우트에만 적용됩니다. Swagger UI는 게이트
/// 바깥에서 병합되고, trace/cors/timeout 레이어가 전체를 감쌉니다.
fn create_router(state: Arc<AppState>) -> Router {
    let gate = AuthGate::new(&state.config.auth);
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    create_api_router()
        .layer(middleware::from_fn_with_state(gate, auth_middleware))
        .merge(swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

/// 종료 시그널 대기.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received, stopping server");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // 설정 로드 및 검증
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("failed to load config from {config_path}"))?;
    config.validate()?;

    // tracing 초기화
    init_logging(LogConfig::from_app_config(&config.logging))
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Starting Taskboard API server...");

    // 데이터베이스 연결
    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| config.database.url.clone())
        .context("DATABASE_URL not set and database.url missing from config")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connection_timeout_secs))
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;
    info!("Connected to PostgreSQL");

    let store = Arc::new(PgUserStore::new(pool.clone()));
    let bootstrap_admin = config.auth.bootstrap_admin;
    let addr = config.server.addr();
    let state = Arc::new(AppState::new(config, store.clone()).with_db_pool(pool));

    // 기본 관리자 부트스트랩 (서빙 시작 전에 완료, 실패 시 중단)
    run_bootstrap(store.as_ref(), bootstrap_admin)
        .await
        .context("admin bootstrap failed")?;

    // 라우터 생성 및 서버 시작
    let app = create_router(state);

    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
