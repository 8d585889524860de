//! # Core Module
//!
//! 애플리케이션 전반에서 공유하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 컴포넌트 컨테이너
//! - **ServiceLocator**: `TypeId` 기반 `Arc<T>` 싱글톤 저장소
//! - **명시적 등록**: `main` 에서 생성한 인스턴스를 `set()` 으로 등록
//! - **안전한 조회**: `resolve()` 는 미등록 타입에 대해 panic 대신 에러 반환
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현, 안정적인 에러 코드
//! - **자동 변환**: MongoDB, Redis, validator 에러의 `From` 구현

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
