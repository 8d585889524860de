//! 댓글 핸들러

use actix_web::{get, post, web, HttpResponse};
use crate::core::{AppError, ServiceLocator};
use crate::domain::dto::comments::CreateCommentRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::media::{Base64Image, ImageSource};
use crate::middlewares::AuthMiddleware;
use crate::services::comments::CommentService;

#[get("/publications/{publication_id}/comments")]
pub async fn get_comments(
    publication_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<CommentService>()?;
    let comments = service
        .get_comments_by_publication_id(publication_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// 댓글 작성. 본문의 `image` 는 base64 문자열입니다.
#[post(
    "/users/{user_id}/publications/{publication_id}/comments",
    wrap = "AuthMiddleware::required()"
)]
pub async fn add_comment(
    caller: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let (user_id, publication_id) = path.into_inner();
    let service = ServiceLocator::resolve::<CommentService>()?;

    let CreateCommentRequest { comment, image } = payload.into_inner();
    let image = image.map(Base64Image::new);

    let created = service
        .add_comment(
            &caller,
            user_id,
            publication_id,
            comment,
            image.as_ref().map(|i| i as &dyn ImageSource),
        )
        .await?;

    Ok(HttpResponse::Created().json(created))
}
