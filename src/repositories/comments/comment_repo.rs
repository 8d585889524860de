//! 댓글 MongoDB 리포지토리
//!
//! 댓글 ID 는 단조 증가 시퀀스이므로 `_id` 오름차순이 곧 삽입 순서입니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::Comment,
    repositories::CommentRepository,
};

const COLLECTION: &str = "comments";

pub struct MongoCommentRepository {
    db: Arc<Database>,
}

impl MongoCommentRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Comment> {
        self.db.collection::<Comment>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let publication_index = IndexModel::builder()
            .keys(doc! { "publication_id": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("publication_id_order".to_string())
                .build())
            .build();

        self.collection().create_index(publication_index).await?;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn find_by_publication_id(&self, publication_id: i64) -> AppResult<Vec<Comment>> {
        let cursor = self.collection()
            .find(doc! { "publication_id": publication_id })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn save(&self, mut comment: Comment) -> AppResult<Comment> {
        match comment.id {
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &comment)
                    .await?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("댓글을 찾을 수 없습니다: {}", id)));
                }
            }
            None => {
                comment.id = Some(self.db.next_sequence(COLLECTION).await?);
                self.collection().insert_one(&comment).await?;
            }
        }

        Ok(comment)
    }

    async fn delete_by_publication_id(&self, publication_id: i64) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! { "publication_id": publication_id })
            .await?;

        Ok(result.deleted_count)
    }
}
