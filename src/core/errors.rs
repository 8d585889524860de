//! # Application Error Handling System
//!
//! 소셜 네트워크 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror` 로 에러 체인을 유지하고, `actix_web::ResponseError` 구현을 통해
//! 모든 에러가 일관된 JSON 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! 서비스 계층은 "허용되지 않음", "존재하지 않음", "잘못된 페이로드" 를
//! 서로 다른 변형으로 구분하여 반환합니다. 클라이언트는 HTTP 상태 코드와
//! 응답 본문의 `code` 필드로 에러 종류를 안정적으로 식별할 수 있습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | code |
//! |----------|-------------|------|
//! | `ValidationError` | 400 Bad Request | `VALIDATION_ERROR` |
//! | `AuthenticationError` | 401 Unauthorized | `UNAUTHORIZED` |
//! | `AuthorizationError` | 403 Forbidden | `FORBIDDEN` |
//! | `NotFound` | 404 Not Found | `NOT_FOUND` |
//! | `ConflictError` | 409 Conflict | `CONFLICT` |
//! | `PayloadError` | 422 Unprocessable Entity | `PAYLOAD_ERROR` |
//! | `DatabaseError` | 500 Internal Server Error | `DATABASE_ERROR` |
//! | `RedisError` | 500 Internal Server Error | `CACHE_ERROR` |
//! | `InternalError` | 500 Internal Server Error | `INTERNAL_ERROR` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_publication(&self, id: i64) -> AppResult<Publication> {
//!     self.publications
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("publication {} not found", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 HTTP 상태 코드와 하나의 안정적인 에러 코드 문자열에
/// 대응합니다. 메시지 문자열은 사람이 읽기 위한 것이며 바뀔 수 있지만,
/// [`AppError::code`] 의 반환값은 API 계약의 일부입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    ///
    /// MongoDB 연결 실패, 쿼리 실패, 시퀀스 발급 실패 등을 포함합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// `validator` 검증 실패, 허용 크기를 넘는 이미지 등.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    ///
    /// 참조된 사용자나 게시물이 존재하지 않을 때 발생합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    ///
    /// 토큰 누락, 만료, 서명 불일치, 잘못된 로그인 정보.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    ///
    /// 인증된 호출자가 다른 사용자 명의로 작업을 시도하거나,
    /// 본인 소유가 아닌 게시물을 수정/삭제하려 할 때 발생합니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 업로드 페이로드를 읽지 못한 경우 (422)
    ///
    /// 원본 I/O 에러를 `source` 로 보존합니다. 이 에러가 발생하면
    /// 엔티티는 저장되지 않습니다.
    #[error("Payload error: {context}")]
    PayloadError {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류를 식별하는 안정적인 코드 문자열을 반환합니다.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::RedisError(_) => "CACHE_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::AuthenticationError(_) => "UNAUTHORIZED",
            AppError::AuthorizationError(_) => "FORBIDDEN",
            AppError::PayloadError { .. } => "PAYLOAD_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// I/O 에러를 컨텍스트와 함께 `PayloadError` 로 감쌉니다.
    pub fn payload(context: impl Into<String>, source: std::io::Error) -> Self {
        AppError::PayloadError {
            context: context.into(),
            source,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::PayloadError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// { "error": "Not found: publication 42 not found", "code": "NOT_FOUND" }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 원인을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{} ({})", self, self.code());
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "code": self.code(),
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(&password, cost).context("password hashing failed")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
