//! # Domain Layer Module
//!
//! 소셜 네트워크의 도메인 계층입니다. 비즈니스 규칙은 서비스 계층에 있고,
//! 이 모듈은 그 규칙이 다루는 데이터의 형태를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속 객체 (User, Publication, Comment)
//! ├── DTOs      - API 경계의 요청/응답 투영
//! └── Models    - 요청 단위 값 (인증된 호출자, 토큰 클레임, 업로드 이미지)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 관계
//!
//! ```text
//! User 1 ──< Publication 1 ──< Comment
//!   1 ───────────────────────< Comment
//! ```
//!
//! 모든 관계는 외래 키(`author_id`, `user_id`, `publication_id`)로만 표현합니다.
//! 게시물이 삭제되면 그 댓글도 함께 삭제됩니다 (`PublicationService::delete_publication`).
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::{CommentDto, PublicationDto};
//! use crate::domain::entities::{Comment, Publication, User};
//!
//! let comment: Comment = CommentDto::with_text("좋은 글이네요").to_entity(&user, &publication)?;
//! let projection = CommentDto::from_entity(&comment);
//! ```

pub mod entities;
pub mod dto;
pub mod models;
