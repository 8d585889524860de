//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 비밀번호 인증, 로그인, 사용자 조회를 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      UserService                      │
//! │  ┌───────────────┐ ┌────────────────┐ ┌────────────┐  │
//! │  │ Registration  │ │ Authentication │ │ User Query │  │
//! │  │ • Validation  │ │ • bcrypt verify│ │ • By ID    │  │
//! │  │ • Duplicates  │ │ • JWT issue    │ │ • Caller   │  │
//! │  │ • bcrypt hash │ │                │ │            │  │
//! │  └───────────────┘ └────────────────┘ └────────────┘  │
//! └───────────────────────────────────────────────────────┘
//!              │                          │
//!              ▼                          ▼
//!      dyn UserRepository           TokenService
//! ```
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost (`PasswordConfig::bcrypt_cost`)
//! - **구분 불가능한 실패**: 없는 사용자와 틀린 비밀번호는 같은 에러를 반환합니다.
//! - **민감 정보 제거**: 응답 DTO 에 비밀번호 해시를 포함하지 않습니다.

use std::sync::Arc;
use bcrypt::{hash, verify};
use log::{debug, info, warn};
use validator::Validate;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::users::{LoginRequest, LoginResponse, RegisterRequest, UserResponse},
        entities::User,
        models::auth::AuthenticatedUser,
    },
    repositories::UserRepository,
    services::auth::TokenService,
};

const INVALID_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self::with_bcrypt_cost(user_repo, token_service, PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(
        user_repo: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost,
        }
    }

    /// 회원가입
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 입력 형식 오류
    /// * `ConflictError` - 사용자명 또는 이메일 중복
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        request.validate()?;

        if self.user_repo.find_by_username(&request.username).await?.is_some() {
            warn!("회원가입 거부 - 사용자명 중복: {}", request.username);
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            warn!("회원가입 거부 - 이메일 중복: {}", request.email);
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.user_repo
            .save(User::new(request.username, request.email, password_hash))
            .await?;

        info!("✅ 사용자 등록: {} (id={})", user.username, user.id_or_default());
        Ok(UserResponse::from(user))
    }

    /// 사용자명과 비밀번호로 인증합니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let is_valid = verify(password, &user.password_hash).context("비밀번호 검증 실패")?;

        if !is_valid {
            warn!("로그인 실패: {}", username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// 로그인 후 액세스 토큰을 발급합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = self.authenticate(&request.username, &request.password).await?;
        let access_token = self.token_service.get_token(&user)?;

        info!("🔑 로그인: {}", user.username);
        Ok(LoginResponse::new(user, access_token, self.token_service.expires_in_seconds()))
    }

    /// 인증된 호출자의 사용자 정보
    ///
    /// 토큰은 유효하지만 사용자가 삭제된 경우 인증 실패로 처리합니다.
    pub async fn get_authenticated_user(&self, caller: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user = self.user_repo
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("인증된 사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn get_user_by_id(&self, id: i64) -> AppResult<UserResponse> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))?;

        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::with_bcrypt_cost(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(TokenService::new("test-secret", 1)),
            4,
        )
    }

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: "password123".into(),
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[actix_web::test]
    async fn test_register_assigns_id_and_default_role() {
        let service = service();
        let user = service.register(register_request("alice", "alice@example.com")).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.roles, vec!["user".to_string()]);
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicates() {
        let service = service();
        service.register(register_request("alice", "alice@example.com")).await.unwrap();

        let same_name = service.register(register_request("alice", "new@example.com")).await;
        let same_email = service.register(register_request("alice2", "alice@example.com")).await;

        assert!(matches!(same_name, Err(AppError::ConflictError(_))));
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_register_validates_input() {
        let result = service().register(register_request("a", "nope")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_login_issues_verifiable_token() {
        let service = service();
        service.register(register_request("alice", "alice@example.com")).await.unwrap();

        let response = service.login(login_request("alice", "password123")).await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        let claims = service.token_service.verify_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, response.user.id);
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let service = service();
        service.register(register_request("alice", "alice@example.com")).await.unwrap();

        let wrong = service.login(login_request("alice", "wrong-password")).await.unwrap_err();
        let unknown = service.login(login_request("nobody", "password123")).await.unwrap_err();

        assert!(matches!(wrong, AppError::AuthenticationError(_)));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[actix_web::test]
    async fn test_get_authenticated_user() {
        let service = service();
        let registered = service.register(register_request("alice", "alice@example.com")).await.unwrap();

        let caller = AuthenticatedUser::new(registered.id, "alice", vec!["user".into()]);
        assert_eq!(service.get_authenticated_user(&caller).await.unwrap(), registered);

        let ghost = AuthenticatedUser::new(999, "ghost", vec![]);
        assert!(matches!(
            service.get_authenticated_user(&ghost).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_user_by_id_not_found() {
        assert!(matches!(service().get_user_by_id(5).await, Err(AppError::NotFound(_))));
    }
}
