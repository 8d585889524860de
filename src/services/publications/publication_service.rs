//! # 게시물 서비스
//!
//! 게시물의 작성, 조회, 수정, 삭제를 담당합니다.
//!
//! ## 권한 규칙
//!
//! - 작성: 경로의 사용자 ID 가 호출자 본인이어야 합니다.
//! - 수정/삭제: 게시물 작성자만 가능합니다.
//!
//! ## 연쇄 삭제
//!
//! 게시물을 삭제하면 먼저 그 게시물의 모든 댓글을 삭제한 뒤 게시물을 삭제합니다.
//! 댓글 삭제가 실패하면 게시물은 남아 있습니다.

use std::sync::Arc;
use log::{info, warn};
use validator::Validate;
use crate::{
    config::MediaConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::publications::{CreatePublicationRequest, PublicationDto, UpdatePublicationRequest},
        entities::Publication,
        models::{auth::AuthenticatedUser, media::{load_image, ImageSource}},
    },
    repositories::{CommentRepository, PublicationRepository, UserRepository},
};

pub struct PublicationService {
    user_repo: Arc<dyn UserRepository>,
    publication_repo: Arc<dyn PublicationRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    max_image_bytes: usize,
}

impl PublicationService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        publication_repo: Arc<dyn PublicationRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            user_repo,
            publication_repo,
            comment_repo,
            max_image_bytes: MediaConfig::max_image_bytes(),
        }
    }

    /// 이미지 크기 제한 변경
    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    async fn find_publication(&self, id: i64) -> AppResult<Publication> {
        self.publication_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("게시물을 찾을 수 없습니다: {}", id)))
    }

    fn ensure_author(caller: &AuthenticatedUser, publication: &Publication) -> AppResult<()> {
        if !publication.is_authored_by(caller.user_id) {
            warn!(
                "게시물 {} 작성자가 아닌 사용자 {} 의 변경 시도",
                publication.id.unwrap_or_default(),
                caller.user_id
            );
            return Err(AppError::AuthorizationError(
                "게시물 작성자만 수정하거나 삭제할 수 있습니다".to_string(),
            ));
        }
        Ok(())
    }

    /// 게시물 작성
    ///
    /// # Errors
    ///
    /// * `AuthorizationError` - 다른 사용자 명의로 작성 시도
    /// * `NotFound` - 작성자가 존재하지 않음
    /// * `PayloadError` / `ValidationError` - 이미지 읽기 실패 / 크기 초과
    pub async fn create_publication(
        &self,
        caller: &AuthenticatedUser,
        author_id: i64,
        request: CreatePublicationRequest,
        image: Option<&dyn ImageSource>,
    ) -> AppResult<PublicationDto> {
        if !caller.is(author_id) {
            warn!("사용자 {} 가 사용자 {} 명의로 게시물 작성 시도", caller.user_id, author_id);
            return Err(AppError::AuthorizationError(
                "다른 사용자 명의로 게시물을 작성할 수 없습니다".to_string(),
            ));
        }

        request.validate()?;

        let author = self.user_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", author_id)))?;

        let image = load_image(image, self.max_image_bytes)?;
        let publication = self.publication_repo
            .save(Publication::new(author.id_or_default(), request.text, image))
            .await?;

        info!("📝 게시물 작성: id={} author={}", publication.id.unwrap_or_default(), author_id);
        Ok(PublicationDto::from_entity(&publication))
    }

    pub async fn get_publication(&self, id: i64) -> AppResult<PublicationDto> {
        Ok(PublicationDto::from_entity(&self.find_publication(id).await?))
    }

    /// 전체 게시물, 최신순
    pub async fn list_publications(&self) -> AppResult<Vec<PublicationDto>> {
        let publications = self.publication_repo.find_all().await?;
        Ok(publications.iter().map(PublicationDto::from_entity).collect())
    }

    /// 작성자의 게시물, 최신순
    pub async fn get_publications_by_author(&self, author_id: i64) -> AppResult<Vec<PublicationDto>> {
        let publications = self.publication_repo.find_by_author_id(author_id).await?;
        Ok(publications.iter().map(PublicationDto::from_entity).collect())
    }

    /// 게시물 본문 수정. 작성 시각은 유지되고 수정 시각이 기록됩니다.
    pub async fn update_publication(
        &self,
        caller: &AuthenticatedUser,
        id: i64,
        request: UpdatePublicationRequest,
    ) -> AppResult<PublicationDto> {
        request.validate()?;

        let mut publication = self.find_publication(id).await?;
        Self::ensure_author(caller, &publication)?;

        publication.edit_text(request.text);
        let publication = self.publication_repo.save(publication).await?;

        info!("✏️ 게시물 수정: id={}", id);
        Ok(PublicationDto::from_entity(&publication))
    }

    /// 게시물과 그 댓글을 모두 삭제합니다.
    ///
    /// 게시물을 먼저 지워 새 댓글이 게시물을 찾지 못하게 한 뒤 댓글을 지웁니다.
    /// 두 삭제는 하나의 트랜잭션이 아니므로, 게시물 삭제 직전에 게시물을 조회한
    /// `add_comment` 가 댓글 삭제 이후에 저장하면 고아 댓글이 남을 수 있습니다.
    pub async fn delete_publication(&self, caller: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let publication = self.find_publication(id).await?;
        Self::ensure_author(caller, &publication)?;

        if !self.publication_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("게시물을 찾을 수 없습니다: {}", id)));
        }

        let removed_comments = self.comment_repo.delete_by_publication_id(id).await?;

        info!("🗑️ 게시물 삭제: id={} (댓글 {}개 함께 삭제)", id, removed_comments);
        Ok(())
    }
}
