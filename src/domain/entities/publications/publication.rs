//! Publication Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::optional_binary;

/// 게시물 엔티티
///
/// 작성자는 `author_id` 로 참조하며 생성 시점에 정해진 뒤 바뀌지 않습니다.
/// 댓글은 게시물에 포함되지 않고 `Comment::publication_id` 로 게시물을 가리킵니다.
/// 게시물이 삭제되면 댓글도 함께 삭제됩니다 (`PublicationService::delete_publication`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 작성자 사용자 ID
    pub author_id: i64,
    /// 본문
    pub text: String,
    /// 첨부 이미지 (BSON binary)
    #[serde(default, with = "optional_binary", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    /// 생성 시간 (불변)
    pub creation_date: DateTime,
    /// 마지막 수정 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_date: Option<DateTime>,
}

impl Publication {
    /// 새 게시물 생성. 생성 시간은 항상 현재 시각입니다.
    pub fn new(author_id: i64, text: String, image: Option<Vec<u8>>) -> Self {
        Self {
            id: None,
            author_id,
            text,
            image,
            creation_date: DateTime::now(),
            edition_date: None,
        }
    }

    /// 본문을 수정하고 수정 시간을 기록합니다.
    pub fn edit_text(&mut self, text: String) {
        self.text = text;
        self.edition_date = Some(DateTime::now());
    }

    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}
