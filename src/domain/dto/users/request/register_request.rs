//! 회원가입 요청 DTO
//!
//! JSON 역직렬화 후 `validator` 로 형식 검증을 수행합니다.
//! 중복 검사는 서비스 계층에서 처리합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (서버에서 bcrypt 로 해싱)
    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자 사이여야 합니다"))]
    pub password: String,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}
