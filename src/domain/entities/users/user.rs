//! User Entity Implementation
//!
//! 게시물과 댓글의 작성자가 되는 사용자 엔티티입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 사용자는 게시물과 댓글을 외래 키(`author_id`, `user_id`)로만 소유합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 영속성 계층이 발급하는 식별자 (저장 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 사용자 이름 (unique, 토큰의 subject)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 기본 역할
    pub const DEFAULT_ROLE: &'static str = "user";

    /// 새 로컬 사용자 생성
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            roles: vec![Self::DEFAULT_ROLE.to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 사용자의 ID. 저장 전이면 0
    pub fn id_or_default(&self) -> i64 {
        self.id.unwrap_or_default()
    }
}
