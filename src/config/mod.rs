//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소, 서버, 업로드 제한 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="https://app.example.com"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"          # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_network"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export BCRYPT_COST="12"
//!
//! # 업로드
//! export MAX_IMAGE_BYTES="5242880"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 값에 따라 `main` 에서 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
