//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 인증, 조회를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = ServiceLocator::resolve::<UserService>()?;
//! let response = user_service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
