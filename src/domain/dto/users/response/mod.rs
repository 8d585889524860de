//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 외부에 노출 가능한 형태로 투영합니다.
//!
//! ## 로그인 응답 예시
//!
//! ```json
//! {
//!   "user": { "id": 1, "username": "alice", "email": "alice@example.com", "roles": ["user"], ... },
//!   "access_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "token_type": "Bearer",
//!   "expires_in": 86400
//! }
//! ```
//!
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

pub mod user_response;

pub use user_response::{LoginResponse, UserResponse};
