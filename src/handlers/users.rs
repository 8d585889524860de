use actix_web::{get, web, HttpResponse};
use crate::core::{AppError, ServiceLocator};
use crate::services::users::UserService;

#[get("/users/{user_id}")]
pub async fn get_user(
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<UserService>()?;
    let user = service.get_user_by_id(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
