//! 캐싱 계층
//!
//! Redis 기반 read-through 캐시를 제공합니다. 현재는 사용자 조회에만 사용됩니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
