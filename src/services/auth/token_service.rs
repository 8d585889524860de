//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 JWT 의 발급과 검증을 담당합니다.
//! 토큰의 `sub` 는 사용자 이름이며, 사용자 ID 와 역할은 별도 클레임으로 포함됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use jsonwebtoken::errors::ErrorKind;
use serde_json::{Map, Value};
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::User,
    domain::models::token::TokenClaims,
};

/// 호출자가 덮어쓸 수 없는 등록 클레임
const RESERVED_CLAIMS: [&str; 5] = ["sub", "user_id", "roles", "iat", "exp"];

/// JWT 토큰 관리 서비스
///
/// 서명 키와 만료 시간은 생성 시점에 고정됩니다.
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 환경 설정(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)으로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 발급 토큰의 유효 시간 (초)
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// 사용자를 위한 액세스 토큰 생성
    pub fn get_token(&self, user: &User) -> AppResult<String> {
        self.get_token_with_claims(Map::new(), user)
    }

    /// 추가 클레임을 포함한 액세스 토큰 생성
    ///
    /// 등록 클레임과 이름이 겹치는 추가 클레임은 무시됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은 사용자(ID 없음) 또는 서명 실패
    pub fn get_token_with_claims(&self, mut extra_claims: Map<String, Value>, user: &User) -> AppResult<String> {
        let user_id = user.id.ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        for reserved in RESERVED_CLAIMS {
            extra_claims.remove(reserved);
        }

        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.username.clone(),
            user_id,
            roles: user.roles.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            extra: extra_claims,
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// 토큰의 주체(사용자 이름)
    pub fn get_username_from_token(&self, token: &str) -> AppResult<String> {
        Ok(self.verify_token(token)?.sub)
    }

    /// 토큰이 해당 사용자의 것이고 만료되지 않았는지 확인합니다.
    pub fn is_token_valid(&self, token: &str, user: &User) -> bool {
        match self.verify_token(token) {
            Ok(claims) => claims.sub == user.username && claims.exp > Utc::now().timestamp(),
            Err(_) => false,
        }
    }

    /// `Authorization: Bearer {token}` 헤더에서 토큰 부분을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 1)
    }

    fn user() -> User {
        let mut user = User::new("alice".into(), "alice@example.com".into(), "hash".into());
        user.id = Some(1);
        user
    }

    #[test]
    fn test_token_roundtrip() {
        let service = service();
        let token = service.get_token(&user()).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.roles, vec!["user".to_string()]);
        assert_eq!(claims.exp - claims.iat, 3600);

        assert_eq!(service.get_username_from_token(&token).unwrap(), "alice");
        assert!(service.is_token_valid(&token, &user()));
    }

    #[test]
    fn test_extra_claims_are_included_but_cannot_override() {
        let service = service();
        let mut extra = Map::new();
        extra.insert("device".into(), Value::from("mobile"));
        extra.insert("sub".into(), Value::from("mallory"));

        let token = service.get_token_with_claims(extra, &user()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.extra.get("device"), Some(&Value::from("mobile")));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = service();
        let token = service.get_token(&user()).unwrap();

        let other = TokenService::new("another-secret", 1);
        assert!(matches!(other.verify_token(&token), Err(AppError::AuthenticationError(_))));

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(service.verify_token(&tampered).is_err());
        assert!(service.verify_token("not.a.jwt").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test-secret", -1);
        let token = service.get_token(&user()).unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected expiry error, got {:?}", other),
        }
        assert!(!service.is_token_valid(&token, &user()));
    }

    #[test]
    fn test_token_of_other_user_is_not_valid_for_user() {
        let service = service();
        let token = service.get_token(&user()).unwrap();

        let mut bob = User::new("bob".into(), "bob@example.com".into(), "hash".into());
        bob.id = Some(2);
        assert!(!service.is_token_valid(&token, &bob));
    }

    #[test]
    fn test_unsaved_user_cannot_get_token() {
        let unsaved = User::new("ghost".into(), "ghost@example.com".into(), "hash".into());
        assert!(matches!(service().get_token(&unsaved), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();
        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
