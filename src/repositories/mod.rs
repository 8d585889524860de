//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 저장소가 아닌 이 모듈의 트레이트에만 의존합니다.
//! 운영 환경은 MongoDB 구현(사용자 조회는 Redis 캐시 포함)을 사용하고,
//! 테스트와 `STORAGE_BACKEND=memory` 실행은 [`memory`] 구현을 사용합니다.
//!
//! # 계약
//!
//! - 식별자는 `save` 시점에 저장소가 발급합니다 (`id: None` 인 엔티티).
//! - `id` 가 있는 엔티티의 `save` 는 교체입니다. MongoDB 구현은 없는 ID 에 `NotFound` 를
//!   반환하고, 인메모리 구현은 그 ID 로 삽입한 뒤 이후 발급 ID 를 그보다 크게 유지합니다.
//! - 조회 실패(없음)는 `Ok(None)` 또는 빈 벡터이며 에러가 아닙니다.
//! - 댓글 조회는 삽입 순서를 유지합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{CommentRepository, memory::InMemoryCommentRepository};
//!
//! let repo = InMemoryCommentRepository::default();
//! let comments = repo.find_by_publication_id(42).await?;
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::{Comment, Publication, User};

pub mod users;
pub mod publications;
pub mod comments;
pub mod memory;

pub use users::MongoUserRepository;
pub use publications::MongoPublicationRepository;
pub use comments::MongoCommentRepository;

/// 사용자 저장소
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 신규 사용자는 ID 를 발급해 삽입하고, 기존 사용자는 교체합니다.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// 게시물 저장소
#[async_trait]
pub trait PublicationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Publication>>;

    /// 작성자의 게시물, 최신순
    async fn find_by_author_id(&self, author_id: i64) -> AppResult<Vec<Publication>>;

    /// 전체 게시물, 최신순
    async fn find_all(&self) -> AppResult<Vec<Publication>>;

    async fn save(&self, publication: Publication) -> AppResult<Publication>;

    /// 삭제되었으면 `true`
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// 댓글 저장소
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 게시물의 댓글, 삽입 순서
    async fn find_by_publication_id(&self, publication_id: i64) -> AppResult<Vec<Comment>>;

    async fn save(&self, comment: Comment) -> AppResult<Comment>;

    /// 삭제된 댓글 수
    async fn delete_by_publication_id(&self, publication_id: i64) -> AppResult<u64>;
}
