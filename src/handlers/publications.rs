//! 게시물 핸들러
//!
//! 조회는 공개, 작성/수정/삭제는 인증이 필요합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::{AppError, ServiceLocator};
use crate::domain::dto::publications::{CreatePublicationRequest, UpdatePublicationRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::media::{Base64Image, ImageSource};
use crate::middlewares::AuthMiddleware;
use crate::services::publications::PublicationService;

#[get("/publications")]
pub async fn list_publications() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<PublicationService>()?;
    Ok(HttpResponse::Ok().json(service.list_publications().await?))
}

#[get("/publications/{publication_id}")]
pub async fn get_publication(
    publication_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<PublicationService>()?;
    let publication = service.get_publication(publication_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(publication))
}

#[get("/users/{user_id}/publications")]
pub async fn get_publications_by_author(
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<PublicationService>()?;
    let publications = service.get_publications_by_author(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(publications))
}

#[post("/users/{user_id}/publications", wrap = "AuthMiddleware::required()")]
pub async fn create_publication(
    caller: AuthenticatedUser,
    user_id: web::Path<i64>,
    payload: web::Json<CreatePublicationRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<PublicationService>()?;
    let mut request = payload.into_inner();
    let image = request.image.take().map(Base64Image::new);

    let publication = service
        .create_publication(
            &caller,
            user_id.into_inner(),
            request,
            image.as_ref().map(|i| i as &dyn ImageSource),
        )
        .await?;

    Ok(HttpResponse::Created().json(publication))
}

#[put("/publications/{publication_id}", wrap = "AuthMiddleware::required()")]
pub async fn update_publication(
    caller: AuthenticatedUser,
    publication_id: web::Path<i64>,
    payload: web::Json<UpdatePublicationRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<PublicationService>()?;
    let publication = service
        .update_publication(&caller, publication_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(publication))
}

/// 게시물과 그 댓글을 함께 삭제합니다.
#[delete("/publications/{publication_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_publication(
    caller: AuthenticatedUser,
    publication_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<PublicationService>()?;
    service.delete_publication(&caller, publication_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
