//! 게시물 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{to_utc, Publication};

/// 게시물 응답 DTO
///
/// 이미지 바이트는 응답에 포함하지 않고 존재 여부만 알려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationDto {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub has_image: bool,
    pub creation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_date: Option<DateTime<Utc>>,
}

impl PublicationDto {
    pub fn from_entity(publication: &Publication) -> Self {
        Self {
            id: publication.id.unwrap_or_default(),
            author_id: publication.author_id,
            text: publication.text.clone(),
            has_image: publication.image.is_some(),
            creation_date: to_utc(publication.creation_date),
            edition_date: publication.edition_date.map(to_utc),
        }
    }
}

/// 게시물 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    #[validate(length(min = 1, max = 5000, message = "게시물은 1-5000자 사이여야 합니다"))]
    pub text: String,

    /// base64 이미지
    #[serde(default)]
    pub image: Option<String>,
}

/// 게시물 수정 요청 (텍스트만 수정 가능)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePublicationRequest {
    #[validate(length(min = 1, max = 5000, message = "게시물은 1-5000자 사이여야 합니다"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entity_copies_fields() {
        let mut publication = Publication::new(7, "first post".into(), Some(vec![9; 4]));
        publication.id = Some(42);

        let dto = PublicationDto::from_entity(&publication);

        assert_eq!(dto.id, 42);
        assert_eq!(dto.author_id, 7);
        assert_eq!(dto.text, "first post");
        assert!(dto.has_image);
        assert_eq!(dto.creation_date, to_utc(publication.creation_date));
        assert!(dto.edition_date.is_none());
    }

    #[test]
    fn test_from_entity_includes_edition_date_after_edit() {
        let mut publication = Publication::new(7, "draft".into(), None);
        publication.edit_text("final".into());

        let dto = PublicationDto::from_entity(&publication);

        assert_eq!(dto.text, "final");
        assert!(dto.edition_date.is_some());
    }
}
