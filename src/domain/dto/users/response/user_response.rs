use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{to_utc, User};

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_or_default();
        let User {
            username,
            email,
            roles,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            roles,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    /// 토큰 유효 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(user: User, access_token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let mut user = User::new("bob".into(), "bob@example.com".into(), "$2b$secret".into());
        user.id = Some(5);

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(json.contains("\"id\":5"));
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$secret"));
    }

    #[test]
    fn test_login_response_is_bearer() {
        let user = User::new("bob".into(), "bob@example.com".into(), "hash".into());
        let response = LoginResponse::new(user, "token".into(), 3600);

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }
}
