//! Redis JSON 캐시
//!
//! 값은 `serde_json` 문자열로 저장되며 모든 키에 만료 시간이 붙습니다.
//! 연결은 [`ConnectionManager`] 하나를 복제해 공유하므로 요청마다 새 연결을 열지 않습니다.
//!
//! 캐시는 보조 수단입니다. 리포지토리는 여기서 나온 에러를 로그로만 남기고
//! 데이터베이스 결과를 그대로 사용합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use crate::{
    config::StorageConfig,
    core::errors::{AppError, AppResult},
};

#[derive(Clone)]
pub struct RedisClient {
    connection: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL` 로 연결하고 PING 으로 가용성을 확인합니다.
    pub async fn new() -> AppResult<Self> {
        let client = Client::open(StorageConfig::redis_url())?;
        let mut connection = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut connection).await?;
        log::info!("✅ Redis 연결 성공");

        Ok(Self { connection })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection.get(key).await?;

        raw.map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| AppError::RedisError(format!("캐시 값 역직렬화 실패 ({}): {}", key, e)))
        })
        .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> AppResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::RedisError(format!("캐시 값 직렬화 실패 ({}): {}", key, e)))?;

        let mut connection = self.connection.clone();
        connection.set_ex::<_, _, ()>(key, json, seconds as u64).await?;
        Ok(())
    }

    pub async fn del(&self, key: &str) -> AppResult<()> {
        let mut connection = self.connection.clone();
        connection.del::<_, ()>(key).await?;
        Ok(())
    }
}
