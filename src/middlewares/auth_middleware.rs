//! JWT 인증 미들웨어
//!
//! `Authorization: Bearer {token}` 헤더를 검증하고, 성공하면 [`AuthenticatedUser`]
//! 를 request extensions 에 넣습니다. 핸들러는 `AuthenticatedUser` 추출자로 호출자를 받습니다.
//! 토큰이 없거나 유효하지 않으면 핸들러를 호출하지 않고 401 `UNAUTHORIZED` 로 응답합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 토큰이 반드시 필요한 미들웨어
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
