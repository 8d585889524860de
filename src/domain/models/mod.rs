//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ### Entities (`../entities/`) 와의 구분
//! - **Entities**: 데이터베이스에 저장되고 식별자를 가짐
//! - **Models**: 요청 단위로 만들어지고 버려지는 값 (호출자 신원, 토큰 클레임, 업로드 소스)
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증된 호출자(`AuthenticatedUser`), 인증 모드/역할 요구사항
//! - [`token`] - JWT 클레임
//! - [`media`] - 업로드 이미지 소스와 크기 계약

pub mod auth;
pub mod token;
pub mod media;
