//! 회원가입, 로그인, 현재 사용자 조회 핸들러

use actix_web::{get, post, web, HttpResponse};
use crate::core::{AppError, ServiceLocator};
use crate::domain::dto::users::{LoginRequest, RegisterRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

#[post("/auth/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<UserService>()?;
    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[post("/auth/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<UserService>()?;
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 소유자 정보
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::resolve::<UserService>()?;
    let user = service.get_authenticated_user(&caller).await?;

    Ok(HttpResponse::Ok().json(user))
}
