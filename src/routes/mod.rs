//! 라우트 구성
//!
//! 모든 API 는 `/api/v1` 스코프 하나에 등록됩니다. 같은 경로에 공개/보호
//! 메서드가 섞여 있으므로 인증은 스코프가 아닌 핸들러 단위(`wrap`)로 적용합니다.

use crate::config::MediaConfig;
use crate::core::AppError;
use crate::handlers;
use actix_web::{error, web, HttpRequest};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(configure_auth_routes)
            .configure(configure_user_routes)
            .configure(configure_publication_routes)
            .configure(configure_comment_routes),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::me);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::get_user);
}

fn configure_publication_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::publications::list_publications)
        .service(handlers::publications::get_publication)
        .service(handlers::publications::get_publications_by_author)
        .service(handlers::publications::create_publication)
        .service(handlers::publications::update_publication)
        .service(handlers::publications::delete_publication);
}

fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::comments::get_comments)
        .service(handlers::comments::add_comment);
}

/// JSON 본문 설정
///
/// base64 이미지가 실릴 수 있도록 본문 한도를 이미지 한도의 4/3 배 + 여유분으로 잡고,
/// 파싱 실패는 `AppError::ValidationError` 형식으로 응답합니다.
fn json_config() -> web::JsonConfig {
    let limit = MediaConfig::max_image_bytes() / 3 * 4 + 64 * 1024;

    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
            log::warn!("잘못된 JSON 본문 {} {}: {}", req.method(), req.path(), err);
            AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
        })
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_network_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
