//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! 엔티티는 외부에 직접 노출하지 않고, 항상 이 모듈의 투영을 거칩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/          # 회원가입/로그인 요청, 사용자 응답
//! ├── publications/   # PublicationDto, 작성/수정 요청
//! └── comments/       # CommentDto, 작성 요청
//! ```
//!
//! ## 변환 규칙
//!
//! - **Entity → DTO**: `from_entity` / `From<Entity>`
//! - **DTO → Entity**: `CommentDto::to_entity` 만 존재하며, 댓글 생성 시각을 결정하는 유일한 지점입니다.
//! - 이미지 바이트와 비밀번호 해시는 어떤 응답 DTO 에도 포함되지 않습니다.
//! - 모든 필드는 snake_case JSON 으로 직렬화됩니다.

pub mod users;
pub mod publications;
pub mod comments;

pub use users::*;
pub use publications::*;
pub use comments::*;
