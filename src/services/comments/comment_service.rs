//! # 댓글 서비스
//!
//! 댓글 작성과 게시물별 댓글 조회를 담당합니다.
//!
//! ## 댓글 작성 순서
//!
//! ```text
//! 1. 호출자 확인     requesting_user_id == caller.user_id   (아니면 AuthorizationError)
//! 2. 사용자 해석     UserRepository::find_by_id             (없으면 NotFound)
//! 3. 게시물 해석     PublicationRepository::find_by_id      (없으면 NotFound)
//! 4. 엔티티 생성     CommentDto::to_entity (생성 시각 = 현재)
//! 5. 이미지 읽기     load_image                              (PayloadError / ValidationError)
//! 6. 저장            CommentRepository::save                 (ID 발급)
//! 7. 투영            CommentDto::from_entity                 (이미지 제외)
//! ```
//!
//! 1-5 중 하나라도 실패하면 아무것도 저장되지 않습니다.

use std::sync::Arc;
use log::{debug, info, warn};
use validator::Validate;
use crate::{
    config::MediaConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::comments::CommentDto,
        models::{auth::AuthenticatedUser, media::{load_image, ImageSource}},
    },
    repositories::{CommentRepository, PublicationRepository, UserRepository},
};

pub struct CommentService {
    user_repo: Arc<dyn UserRepository>,
    publication_repo: Arc<dyn PublicationRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    max_image_bytes: usize,
}

impl CommentService {
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

    /// 댓글 작성
    ///
    /// `comment_data` 에서는 `text` 만 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AuthorizationError` - 다른 사용자 명의로 작성 시도
    /// * `NotFound` - 사용자 또는 게시물 없음
    /// * `PayloadError` - 이미지 읽기 실패 (원인 I/O 에러 포함)
    /// * `ValidationError` - 2000자를 넘는 텍스트 또는 이미지 크기 초과
    pub async fn add_comment(
        &self,
        caller: &AuthenticatedUser,
        requesting_user_id: i64,
        publication_id: i64,
        comment_data: CommentDto,
        image: Option<&dyn ImageSource>,
    ) -> AppResult<CommentDto> {
        if !caller.is(requesting_user_id) {
            warn!(
                "사용자 {} 가 사용자 {} 명의로 댓글 작성 시도",
                caller.user_id, requesting_user_id
            );
            return Err(AppError::AuthorizationError(
                "다른 사용자 명의로 댓글을 작성할 수 없습니다".to_string(),
            ));
        }

        comment_data.validate()?;

        let user = self.user_repo
            .find_by_id(requesting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", requesting_user_id)))?;

        let publication = self.publication_repo
            .find_by_id(publication_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("게시물을 찾을 수 없습니다: {}", publication_id)))?;

        let mut comment = comment_data.to_entity(&user, &publication)?;
        comment.image = load_image(image, self.max_image_bytes)?;

        let comment = self.comment_repo.save(comment).await?;

        info!(
            "💬 댓글 작성: id={} publication={} user={}",
            comment.id.unwrap_or_default(),
            publication_id,
            requesting_user_id
        );
        Ok(CommentDto::from_entity(&comment))
    }

    /// 게시물의 댓글 목록 (작성 순)
    ///
    /// 게시물이 없거나 댓글이 없으면 빈 목록입니다.
    pub async fn get_comments_by_publication_id(&self, publication_id: i64) -> AppResult<Vec<CommentDto>> {
        let comments = self.comment_repo.find_by_publication_id(publication_id).await?;
        debug!("게시물 {} 댓글 {}개 조회", publication_id, comments.len());

        Ok(comments.iter().map(CommentDto::from_entity).collect())
    }
}
