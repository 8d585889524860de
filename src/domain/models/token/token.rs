//! JWT 클레임 구조체
//!
//! RFC 7519 표준 클레임과 애플리케이션 클레임을 포함합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 이름)
/// - `user_id`: 사용자 ID
/// - `roles`: 사용자 권한 목록
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
/// - 그 밖의 추가 클레임은 `extra` 로 평탄화되어 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이름)
    pub sub: String,
    /// 사용자 ID
    pub user_id: i64,
    /// 사용자 역할 목록
    #[serde(default)]
    pub roles: Vec<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 호출자가 지정한 추가 클레임
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
