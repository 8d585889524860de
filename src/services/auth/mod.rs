//! 인증 서비스 모듈
//!
//! JWT 기반 토큰 인증을 제공합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리 (`JWT_EXPIRATION_HOURS`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = ServiceLocator::resolve::<TokenService>()?;
//! let token = token_service.get_token(&user)?;
//! ```

pub mod token_service;

pub use token_service::TokenService;
