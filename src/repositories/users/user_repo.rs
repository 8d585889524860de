//! # 사용자 리포지토리 구현
//!
//! MongoDB 를 주 저장소로 사용하고, ID 조회에는 Redis 캐시를 사용합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `user:{user_id}`
//! - **TTL**: `StorageConfig::user_cache_ttl_seconds()` (기본 600초)
//! - **쓰기 후 무효화**: `save` 시 해당 키를 삭제합니다.
//! - 캐시 실패는 경고 로그만 남기고 MongoDB 결과를 그대로 사용합니다.
//!
//! ## 인덱스
//!
//! `users` 컬렉션: email(unique), username(unique)

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use mongodb::error::{ErrorKind, WriteFailure};
use log::{debug, warn};
use crate::{
    caching::redis::RedisClient,
    config::StorageConfig,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::User,
    repositories::UserRepository,
};

const COLLECTION: &str = "users";
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB + Redis 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }

    fn cache_key(id: i64) -> String {
        format!("user:{}", id)
    }

    /// 이메일/사용자명 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index])
            .await?;

        Ok(())
    }
}

/// 유니크 인덱스 위반을 충돌 에러로 변환합니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY => {
            AppError::ConflictError("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
        }
        _ => AppError::from(error),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(id);

        match self.redis.get::<User>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("사용자 캐시 적중: {}", cache_key);
                return Ok(Some(cached));
            }
            Ok(None) => {}
            Err(e) => warn!("사용자 캐시 조회 실패 ({}): {}", cache_key, e),
        }

        let user = self.collection().find_one(doc! { "_id": id }).await?;

        if let Some(ref user) = user {
            if let Err(e) = self.redis
                .set_with_expiry(&cache_key, user, StorageConfig::user_cache_ttl_seconds())
                .await
            {
                warn!("사용자 캐시 저장 실패 ({}): {}", cache_key, e);
            }
        }

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.collection().find_one(doc! { "username": username }).await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection().find_one(doc! { "email": email }).await?)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .await
                    .map_err(map_write_error)?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)));
                }

                if let Err(e) = self.redis.del(&Self::cache_key(id)).await {
                    warn!("사용자 캐시 무효화 실패 ({}): {}", id, e);
                }
            }
            None => {
                user.id = Some(self.db.next_sequence(COLLECTION).await?);
                self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(map_write_error)?;
            }
        }

        Ok(user)
    }
}
