//! 게시물 MongoDB 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::Publication,
    repositories::PublicationRepository,
};

const COLLECTION: &str = "publications";

pub struct MongoPublicationRepository {
    db: Arc<Database>,
}

impl MongoPublicationRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Publication> {
        self.db.collection::<Publication>(COLLECTION)
    }

    /// 작성자별 조회를 위한 `author_id` 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let author_index = IndexModel::builder()
            .keys(doc! { "author_id": 1, "creation_date": -1 })
            .options(IndexOptions::builder()
                .name("author_id_creation_date".to_string())
                .build())
            .build();

        self.collection().create_index(author_index).await?;
        Ok(())
    }
}

#[async_trait]
impl PublicationRepository for MongoPublicationRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Publication>> {
        Ok(self.collection().find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_author_id(&self, author_id: i64) -> AppResult<Vec<Publication>> {
        let cursor = self.collection()
            .find(doc! { "author_id": author_id })
            .sort(doc! { "creation_date": -1, "_id": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_all(&self) -> AppResult<Vec<Publication>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "creation_date": -1, "_id": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn save(&self, mut publication: Publication) -> AppResult<Publication> {
        match publication.id {
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &publication)
                    .await?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("게시물을 찾을 수 없습니다: {}", id)));
                }
            }
            None => {
                publication.id = Some(self.db.next_sequence(COLLECTION).await?);
                self.collection().insert_one(&publication).await?;
            }
        }

        Ok(publication)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self.collection().delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
