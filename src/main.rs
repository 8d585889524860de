use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use social_network_backend::caching::redis::RedisClient;
use social_network_backend::config::{ServerConfig, StorageBackend, StorageConfig};
use social_network_backend::core::registry::ServiceLocator;
use social_network_backend::db::Database;
use social_network_backend::repositories::memory::{
    InMemoryCommentRepository, InMemoryPublicationRepository, InMemoryUserRepository,
};
use social_network_backend::repositories::{
    CommentRepository, MongoCommentRepository, MongoPublicationRepository, MongoUserRepository,
    PublicationRepository, UserRepository,
};
use social_network_backend::routes::configure_all_routes;
use social_network_backend::services::auth::TokenService;
use social_network_backend::services::comments::CommentService;
use social_network_backend::services::publications::PublicationService;
use social_network_backend::services::users::UserService;

#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

/// 서비스가 사용할 저장소 묶음
struct Repositories {
    users: Arc<dyn UserRepository>,
    publications: Arc<dyn PublicationRepository>,
    comments: Arc<dyn CommentRepository>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 소셜 네트워크 백엔드 시작중...");

    let repositories = initialize_repositories().await?;
    register_services(repositories);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = ServerConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORAGE_BACKEND` 에 따라 저장소를 준비합니다.
async fn initialize_repositories() -> std::io::Result<Repositories> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용 - 재시작 시 데이터가 사라집니다");
            Ok(Repositories {
                users: Arc::new(InMemoryUserRepository::default()),
                publications: Arc::new(InMemoryPublicationRepository::default()),
                comments: Arc::new(InMemoryCommentRepository::default()),
            })
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(
                Database::new()
                    .await
                    .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?,
            );
            let redis_client = Arc::new(
                RedisClient::new()
                    .await
                    .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?,
            );

            let users = MongoUserRepository::new(database.clone(), redis_client);
            let publications = MongoPublicationRepository::new(database.clone());
            let comments = MongoCommentRepository::new(database);

            users.create_indexes().await.map_err(std::io::Error::other)?;
            publications.create_indexes().await.map_err(std::io::Error::other)?;
            comments.create_indexes().await.map_err(std::io::Error::other)?;
            info!("✅ 인덱스 준비 완료");

            Ok(Repositories {
                users: Arc::new(users),
                publications: Arc::new(publications),
                comments: Arc::new(comments),
            })
        }
    }
}

fn register_services(repositories: Repositories) {
    let Repositories { users, publications, comments } = repositories;

    let token_service = Arc::new(TokenService::from_config());

    ServiceLocator::set(Arc::new(UserService::new(users.clone(), token_service.clone())));
    ServiceLocator::set(Arc::new(PublicationService::new(
        users.clone(),
        publications.clone(),
        comments.clone(),
    )));
    ServiceLocator::set(Arc::new(CommentService::new(users, publications, comments)));
    ServiceLocator::set(token_service);
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig { per_second, burst_size };
    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
