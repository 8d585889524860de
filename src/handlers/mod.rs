//! # HTTP Request Handlers Module
//!
//! HTTP 엔드포인트를 처리하는 얇은 어댑터입니다.
//! 요청을 파싱하고, `ServiceLocator` 에서 서비스를 꺼내 호출한 뒤, 결과를 JSON 으로 응답합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 규칙
//!
//! - 핸들러는 `Result<HttpResponse, AppError>` 를 반환하고, 에러 응답은
//!   `AppError` 의 `ResponseError` 구현이 `{"error", "code"}` 형태로 만듭니다.
//! - 인증이 필요한 엔드포인트는 `wrap = "AuthMiddleware::required()"` 로 표시하고
//!   `AuthenticatedUser` 추출자로 호출자를 받아 서비스에 그대로 전달합니다.
//! - 이미지는 JSON 본문의 base64 문자열로 받아 `Base64Image` 로 넘깁니다.
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`auth`] | `POST /auth/register`, `POST /auth/login`, `GET /me` |
//! | [`users`] | `GET /users/{id}` |
//! | [`publications`] | 게시물 목록/조회/작성/수정/삭제 |
//! | [`comments`] | 댓글 목록/작성 |

pub mod auth;
pub mod users;
pub mod publications;
pub mod comments;
