//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 트레이트 객체(`Arc<dyn ...>`)를 주입받아 생성되고,
//! `main` 에서 `ServiceLocator` 에 등록됩니다. 호출자 신원은 항상
//! `&AuthenticatedUser` 인자로 명시적으로 전달됩니다.
//!
//! # Features
//!
//! - 회원가입/로그인 (`users`)
//! - JWT 발급/검증 (`auth`)
//! - 게시물 작성/수정/연쇄 삭제 (`publications`)
//! - 댓글 작성/조회 (`comments`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::comments::CommentService;
//!
//! let comment_service = ServiceLocator::resolve::<CommentService>()?;
//! let dto = comment_service.add_comment(&caller, 1, 42, data, None).await?;
//! ```

pub mod users;
pub mod auth;
pub mod publications;
pub mod comments;
