//! 소셜 네트워크 백엔드
//!
//! 사용자, 게시물, 댓글을 다루는 REST API 서비스입니다.
//! JWT 기반 인증을 사용하며, 게시물과 댓글에는 선택적으로 이미지를 첨부할 수 있습니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 사용자 조회
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **게시물**: 작성, 조회, 작성자 본인만 수정/삭제 (댓글 연쇄 삭제)
//! - **댓글**: 작성 시 호출자 본인 확인, 게시물별 작성 순 조회
//! - **MongoDB**: 영구 저장 (정수 ID 시퀀스)
//! - **Redis**: 사용자 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (명시적 호출자 신원)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 트레이트 (MongoDB / 인메모리)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_network_backend::core::ServiceLocator;
//! use social_network_backend::services::comments::CommentService;
//!
//! let comment_service = ServiceLocator::resolve::<CommentService>()?;
//! let comments = comment_service.get_comments_by_publication_id(42).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
