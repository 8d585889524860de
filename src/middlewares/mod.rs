//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증 (`TokenService`)
//! - 호출자 정보를 request extension 에 저장
//! - 토큰이 없거나 무효하면 401 JSON 에러로 요청을 종료
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::resource("/publications/{id}")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::put().to(update_publication));
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
