//! Comment Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::optional_binary;

/// 댓글 엔티티
///
/// 항상 존재하는 사용자 하나와 게시물 하나를 외래 키로 참조합니다.
/// `creation_date` 는 서버가 정하며 클라이언트 값은 사용하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 작성자 사용자 ID
    pub user_id: i64,
    /// 대상 게시물 ID
    pub publication_id: i64,
    /// 본문
    pub text: String,
    /// 첨부 이미지 (BSON binary)
    #[serde(default, with = "optional_binary", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    /// 생성 시간
    pub creation_date: DateTime,
}
