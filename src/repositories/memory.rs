//! 인메모리 리포지토리
//!
//! 테스트와 `STORAGE_BACKEND=memory` 로컬 실행에서 사용합니다.
//! 각 저장소는 삽입 순서를 유지하는 `Vec` 과 단조 증가 ID 카운터를 가집니다.
//! MongoDB 구현과 달리 저장되지 않은 ID 를 가진 엔티티도 그대로 삽입하므로
//! 테스트 데이터를 고정 ID 로 미리 넣을 수 있습니다.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Comment, Publication, User};
use crate::repositories::{CommentRepository, PublicationRepository, UserRepository};

/// 포이즌 상태에서도 데이터를 계속 사용하는 잠금 헬퍼
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// ID 발급기 (1부터 시작)
#[derive(Debug)]
struct Sequence(AtomicI64);

impl Default for Sequence {
    fn default() -> Self {
        Self(AtomicI64::new(1))
    }
}

impl Sequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    /// 외부에서 정한 ID 로 삽입된 경우, 이후 발급 ID 가 그보다 커지도록 합니다.
    fn observe(&self, id: i64) {
        self.0.fetch_max(id.saturating_add(1), Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    sequence: Sequence,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(read(&self.users).iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users).iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users).iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = write(&self.users);

        // MongoDB 유니크 인덱스와 같은 제약
        let duplicate = users.iter().any(|u| {
            u.id != user.id && (u.username == user.username || u.email == user.email)
        });
        if duplicate {
            return Err(AppError::ConflictError(
                "이미 사용 중인 사용자명 또는 이메일입니다".to_string(),
            ));
        }

        match user.id {
            Some(id) => match users.iter_mut().find(|u| u.id == Some(id)) {
                Some(existing) => *existing = user.clone(),
                None => {
                    self.sequence.observe(id);
                    users.push(user.clone());
                }
            },
            None => {
                user.id = Some(self.sequence.next());
                users.push(user.clone());
            }
        }

        Ok(user)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPublicationRepository {
    publications: RwLock<Vec<Publication>>,
    sequence: Sequence,
}

impl InMemoryPublicationRepository {
    /// 최신순 정렬 (같은 시각이면 나중에 만든 것이 먼저)
    fn newest_first(mut publications: Vec<Publication>) -> Vec<Publication> {
        publications.sort_by(|a, b| {
            b.creation_date
                .cmp(&a.creation_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        publications
    }
}

#[async_trait]
impl PublicationRepository for InMemoryPublicationRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Publication>> {
        Ok(read(&self.publications).iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn find_by_author_id(&self, author_id: i64) -> AppResult<Vec<Publication>> {
        let matching = read(&self.publications)
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();

        Ok(Self::newest_first(matching))
    }

    async fn find_all(&self) -> AppResult<Vec<Publication>> {
        let all = read(&self.publications).clone();
        Ok(Self::newest_first(all))
    }

    async fn save(&self, mut publication: Publication) -> AppResult<Publication> {
        let mut publications = write(&self.publications);

        match publication.id {
            Some(id) => match publications.iter_mut().find(|p| p.id == Some(id)) {
                Some(existing) => *existing = publication.clone(),
                None => {
                    self.sequence.observe(id);
                    publications.push(publication.clone());
                }
            },
            None => {
                publication.id = Some(self.sequence.next());
                publications.push(publication.clone());
            }
        }

        Ok(publication)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut publications = write(&self.publications);
        let before = publications.len();
        publications.retain(|p| p.id != Some(id));
        Ok(publications.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
    sequence: Sequence,
}

impl InMemoryCommentRepository {
    /// 저장된 댓글 원본 (이미지 포함)
    pub fn stored(&self) -> Vec<Comment> {
        read(&self.comments).clone()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_publication_id(&self, publication_id: i64) -> AppResult<Vec<Comment>> {
        Ok(read(&self.comments)
            .iter()
            .filter(|c| c.publication_id == publication_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut comment: Comment) -> AppResult<Comment> {
        let mut comments = write(&self.comments);

        match comment.id {
            Some(id) => match comments.iter_mut().find(|c| c.id == Some(id)) {
                Some(existing) => *existing = comment.clone(),
                None => {
                    self.sequence.observe(id);
                    comments.push(comment.clone());
                }
            },
            None => {
                comment.id = Some(self.sequence.next());
                comments.push(comment.clone());
            }
        }

        Ok(comment)
    }

    async fn delete_by_publication_id(&self, publication_id: i64) -> AppResult<u64> {
        let mut comments = write(&self.comments);
        let before = comments.len();
        comments.retain(|c| c.publication_id != publication_id);
        Ok((before - comments.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(publication_id: i64, text: &str) -> Comment {
        Comment {
            id: None,
            user_id: 1,
            publication_id,
            text: text.to_string(),
            image: None,
            creation_date: mongodb::bson::DateTime::now(),
        }
    }

    #[actix_web::test]
    async fn test_comment_ids_are_assigned_in_order() {
        let repo = InMemoryCommentRepository::default();

        let first = repo.save(comment(42, "first")).await.unwrap();
        let second = repo.save(comment(42, "second")).await.unwrap();
        repo.save(comment(7, "elsewhere")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        let texts: Vec<_> = repo.find_by_publication_id(42).await.unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[actix_web::test]
    async fn test_delete_by_publication_id_counts_removed() {
        let repo = InMemoryCommentRepository::default();
        repo.save(comment(42, "a")).await.unwrap();
        repo.save(comment(42, "b")).await.unwrap();
        repo.save(comment(7, "c")).await.unwrap();

        assert_eq!(repo.delete_by_publication_id(42).await.unwrap(), 2);
        assert!(repo.find_by_publication_id(42).await.unwrap().is_empty());
        assert_eq!(repo.find_by_publication_id(7).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_user_save_rejects_duplicates() {
        let repo = InMemoryUserRepository::default();
        repo.save(User::new("alice".into(), "alice@example.com".into(), "h".into()))
            .await
            .unwrap();

        let result = repo
            .save(User::new("alice".into(), "other@example.com".into(), "h".into()))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_user_save_replaces_existing() {
        let repo = InMemoryUserRepository::default();
        let mut user = repo
            .save(User::new("alice".into(), "alice@example.com".into(), "h".into()))
            .await
            .unwrap();

        user.roles.push("admin".into());
        repo.save(user.clone()).await.unwrap();

        let found = repo.find_by_id(user.id.unwrap()).await.unwrap().unwrap();
        assert!(found.roles.contains(&"admin".to_string()));
    }

    #[actix_web::test]
    async fn test_seeded_ids_are_never_reissued() {
        let publications = InMemoryPublicationRepository::default();
        let mut seeded = Publication::new(7, "seeded".into(), None);
        seeded.id = Some(42);
        publications.save(seeded).await.unwrap();

        let fresh = publications.save(Publication::new(7, "fresh".into(), None)).await.unwrap();
        assert_eq!(fresh.id, Some(43));
        assert_eq!(publications.find_by_id(42).await.unwrap().unwrap().text, "seeded");

        let comments = InMemoryCommentRepository::default();
        let mut seeded = comment(42, "seeded");
        seeded.id = Some(5);
        comments.save(seeded).await.unwrap();
        assert_eq!(comments.save(comment(42, "fresh")).await.unwrap().id, Some(6));

        let users = InMemoryUserRepository::default();
        let mut seeded = User::new("seed".into(), "seed@example.com".into(), "h".into());
        seeded.id = Some(7);
        users.save(seeded).await.unwrap();
        let fresh = users
            .save(User::new("fresh".into(), "fresh@example.com".into(), "h".into()))
            .await
            .unwrap();
        assert_eq!(fresh.id, Some(8));
    }

    #[actix_web::test]
    async fn test_seeding_lower_id_keeps_sequence_ahead() {
        let repo = InMemoryCommentRepository::default();
        repo.save(comment(1, "a")).await.unwrap();
        repo.save(comment(1, "b")).await.unwrap();

        let mut seeded = comment(1, "high");
        seeded.id = Some(1_000);
        repo.save(seeded).await.unwrap();
        let mut low = comment(1, "lower");
        low.id = Some(10);
        repo.save(low).await.unwrap();

        assert_eq!(repo.save(comment(1, "next")).await.unwrap().id, Some(1_001));
    }

    #[actix_web::test]
    async fn test_publication_delete_reports_missing() {
        let repo = InMemoryPublicationRepository::default();
        let saved = repo.save(Publication::new(7, "hi".into(), None)).await.unwrap();

        assert!(repo.delete(saved.id.unwrap()).await.unwrap());
        assert!(!repo.delete(saved.id.unwrap()).await.unwrap());
    }
}
