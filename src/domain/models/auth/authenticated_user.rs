use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 호출자 정보
///
/// 인증 미들웨어가 요청 extension 에 저장하고, 핸들러가 추출하여
/// 서비스 메서드에 인자로 넘깁니다. 서비스는 전역 상태에서
/// "현재 사용자" 를 찾지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: i64,

    /// 사용자 이름 (토큰 subject)
    pub username: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn new(user_id: i64, username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            roles,
        }
    }

    /// 호출자가 주어진 사용자 본인인지 확인
    pub fn is(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}
