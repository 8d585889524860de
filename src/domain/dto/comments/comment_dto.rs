//! 댓글 DTO
//!
//! 댓글 생성 요청과 댓글 응답 모두에 같은 `CommentDto` 를 사용합니다.
//! 응답에는 이미지를 절대 포함하지 않습니다 (이미지는 쓰기 전용).

use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{to_utc, Comment, Publication, User};

/// 댓글 전송 객체
///
/// 입력으로 쓰일 때 `user_id`, `publication_id`, `creation_date` 는 무시됩니다.
/// 식별자는 경로와 해석된 엔티티에서, 생성 시각은 서버 시계에서 결정됩니다.
/// 이미지만 있는 댓글을 위해 빈 `text` 를 허용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CommentDto {
    #[serde(default)]
    pub user_id: i64,

    #[serde(default)]
    pub publication_id: i64,

    #[validate(length(max = 2000, message = "댓글은 2000자 이하여야 합니다"))]
    pub text: String,

    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
}

impl CommentDto {
    /// 텍스트만 가진 입력 DTO
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            user_id: 0,
            publication_id: 0,
            text: text.into(),
            creation_date: None,
        }
    }

    /// 해석된 사용자와 게시물로 저장 전 댓글 엔티티를 만듭니다.
    ///
    /// 생성 시각은 항상 현재 시각이며, DTO 에 들어 있는 값은 사용하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은(ID 없는) 사용자 또는 게시물
    pub fn to_entity(&self, user: &User, publication: &Publication) -> AppResult<Comment> {
        let user_id = user.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자로 댓글을 만들 수 없습니다".to_string())
        })?;
        let publication_id = publication.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 게시물에 댓글을 만들 수 없습니다".to_string())
        })?;

        Ok(Comment {
            id: None,
            user_id,
            publication_id,
            text: self.text.clone(),
            image: None,
            creation_date: bson::DateTime::now(),
        })
    }

    pub fn from_entity(comment: &Comment) -> Self {
        Self {
            user_id: comment.user_id,
            publication_id: comment.publication_id,
            text: comment.text.clone(),
            creation_date: Some(to_utc(comment.creation_date)),
        }
    }
}

/// 댓글 작성 HTTP 요청 본문
///
/// `image` 는 base64 문자열입니다 (`data:` URL 접두사 허용).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub comment: CommentDto,

    #[serde(default)]
    pub image: Option<String>,
}
