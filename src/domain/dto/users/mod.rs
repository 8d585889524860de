//! # 사용자 DTO 모듈
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs   # 회원가입
//! │   └── login_request.rs      # 로그인
//! └── response/
//!     └── user_response.rs      # UserResponse, LoginResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
