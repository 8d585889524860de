//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 을 구조화된 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 길이, 문자 집합 (`validator`)
//! 3. **비즈니스 검증**: 사용자명/이메일 중복 (`UserService`)
//!
//! 검증 실패는 `AppError::ValidationError` 로 변환되어 HTTP 400 으로 응답됩니다.

pub mod register_request;
pub mod login_request;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
