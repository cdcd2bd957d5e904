//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::TokenPair;
use crate::error::ApiErrorResponse;
use crate::routes::{
    ComponentHealth, ComponentStatus, HealthResponse, MeResponse, RefreshRequest, RefreshResponse,
    SignInRequest, SignInResponse, UserResponse, VersionResponse,
};

/// Taskboard API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        description = "프로젝트 관리 백엔드 REST API. 대부분의 엔드포인트는 \
`Authorization: Bearer <token>` 헤더가 필요합니다.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::auth::sign_in,
        crate::routes::auth::refresh_token,
        crate::routes::auth::me,
        crate::routes::version::get_version,
    ),
    components(schemas(
        HealthResponse,
        ComponentHealth,
        ComponentStatus,
        SignInRequest,
        SignInResponse,
        UserResponse,
        RefreshRequest,
        RefreshResponse,
        MeResponse,
        VersionResponse,
        TokenPair,
        ApiErrorResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "auth", description = "인증 - 로그인 및 토큰 갱신"),
        (name = "general", description = "일반 - 버전 등"),
    )
)]
pub struct ApiDoc;

/// Bearer 인증 스키마 등록.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Swagger UI 라우터 생성.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
