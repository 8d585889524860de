//! HTTP 통합 테스트
//!
//! 인메모리 저장소로 구성한 서비스를 `ServiceLocator` 에 한 번 등록하고,
//! 실제 라우트 구성(`configure_all_routes`)을 통해 요청을 보냅니다.
//! 테스트들은 같은 저장소를 공유하므로 각 테스트는 고유한 사용자를 만듭니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use actix_http::Request;
use serde_json::{json, Value};

use social_network_backend::core::ServiceLocator;
use social_network_backend::repositories::memory::{
    InMemoryCommentRepository, InMemoryPublicationRepository, InMemoryUserRepository,
};
use social_network_backend::repositories::{CommentRepository, PublicationRepository, UserRepository};
use social_network_backend::routes::configure_all_routes;
use social_network_backend::services::auth::TokenService;
use social_network_backend::services::comments::CommentService;
use social_network_backend::services::publications::PublicationService;
use social_network_backend::services::users::UserService;

static INIT: Once = Once::new();
static NEXT_USER: AtomicUsize = AtomicUsize::new(1);

fn init_services() {
    INIT.call_once(|| {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::default());
        let publications: Arc<dyn PublicationRepository> = Arc::new(InMemoryPublicationRepository::default());
        let comments: Arc<dyn CommentRepository> = Arc::new(InMemoryCommentRepository::default());
        let token_service = Arc::new(TokenService::new("integration-test-secret", 1));

        ServiceLocator::set(Arc::new(UserService::with_bcrypt_cost(
            users.clone(),
            token_service.clone(),
            4,
        )));
        ServiceLocator::set(Arc::new(
            PublicationService::new(users.clone(), publications.clone(), comments.clone())
                .with_max_image_bytes(1024),
        ));
        ServiceLocator::set(Arc::new(
            CommentService::new(users, publications, comments).with_max_image_bytes(1024),
        ));
        ServiceLocator::set(token_service);
    });
}

async fn app() -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    init_services();
    test::init_service(App::new().configure(configure_all_routes)).await
}

/// 로그인까지 마친 테스트 사용자
struct TestUser {
    id: i64,
    token: String,
}

impl TestUser {
    fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }
}

async fn signup<S>(app: &S) -> TestUser
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let n = NEXT_USER.fetch_add(1, Ordering::SeqCst);
    let username = format!("member_{}", n);
    let password = "password123";

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": password,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let registered: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: Value = test::read_body_json(resp).await;

    TestUser {
        id: registered["id"].as_i64().unwrap(),
        token: login["access_token"].as_str().unwrap().to_string(),
    }
}

async fn publish<S>(app: &S, author: &TestUser, text: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/users/{}/publications", author.id))
        .insert_header(author.bearer())
        .set_json(json!({ "text": text }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    body["id"].as_i64().unwrap()
}

async fn expect_error(resp: ServiceResponse, status: StatusCode, code: &str) {
    assert_eq!(resp.status(), status);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], code);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn health_check_responds() {
    let app = app().await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn me_requires_a_valid_token() {
    let app = app().await;
    let user = signup(&app).await;

    let req = test::TestRequest::get().uri("/api/v1/me").insert_header(user.bearer()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["id"], user.id);
    assert!(me.get("password_hash").is_none());

    let anonymous = test::call_service(&app, test::TestRequest::get().uri("/api/v1/me").to_request()).await;
    expect_error(anonymous, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;

    let forged = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    expect_error(test::call_service(&app, forged).await, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn registration_rejects_duplicates_and_invalid_input() {
    let app = app().await;

    let body = json!({ "username": "dup_user", "email": "dup_user@example.com", "password": "password123" });
    let first = test::TestRequest::post().uri("/api/v1/auth/register").set_json(&body).to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let again = test::TestRequest::post().uri("/api/v1/auth/register").set_json(&body).to_request();
    expect_error(test::call_service(&app, again).await, StatusCode::CONFLICT, "CONFLICT").await;

    let invalid = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": "x", "email": "nope", "password": "1" }))
        .to_request();
    expect_error(test::call_service(&app, invalid).await, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let malformed = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    expect_error(test::call_service(&app, malformed).await, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[actix_web::test]
async fn wrong_password_is_unauthorized() {
    let app = app().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": "nobody_here", "password": "password123" }))
        .to_request();
    expect_error(test::call_service(&app, req).await, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn comment_flow_with_image() {
    let app = app().await;
    let author = signup(&app).await;
    let commenter = signup(&app).await;
    let publication_id = publish(&app, &author, "hello world").await;

    for (text, image) in [("first", Some("AQIDBA==")), ("second", None)] {
        let mut body = json!({ "text": text, "creation_date": "2000-01-01T00:00:00Z" });
        if let Some(image) = image {
            body["image"] = json!(image);
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/users/{}/publications/{}/comments", commenter.id, publication_id))
            .insert_header(commenter.bearer())
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["user_id"], commenter.id);
        assert_eq!(created["publication_id"], publication_id);
        assert_eq!(created["text"], text);
        assert_ne!(created["creation_date"], "2000-01-01T00:00:00Z");
        assert!(created.get("image").is_none());
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/publications/{}/comments", publication_id))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let texts: Vec<_> = listed.as_array().unwrap().iter().map(|c| c["text"].clone()).collect();
    assert_eq!(texts, vec![json!("first"), json!("second")]);
}

#[actix_web::test]
async fn comment_errors_map_to_distinct_statuses() {
    let app = app().await;
    let author = signup(&app).await;
    let commenter = signup(&app).await;
    let publication_id = publish(&app, &author, "target").await;

    let post_comment = |user_id: i64, publication_id: i64, body: Value| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/users/{}/publications/{}/comments", user_id, publication_id))
            .insert_header(commenter.bearer())
            .set_json(body)
            .to_request()
    };

    let on_behalf = post_comment(author.id, publication_id, json!({ "text": "spoof" }));
    expect_error(test::call_service(&app, on_behalf).await, StatusCode::FORBIDDEN, "FORBIDDEN").await;

    let missing = post_comment(commenter.id, 987_654, json!({ "text": "void" }));
    expect_error(test::call_service(&app, missing).await, StatusCode::NOT_FOUND, "NOT_FOUND").await;

    let broken_image = post_comment(commenter.id, publication_id, json!({ "text": "pic", "image": "@@not-base64@@" }));
    expect_error(test::call_service(&app, broken_image).await, StatusCode::UNPROCESSABLE_ENTITY, "PAYLOAD_ERROR").await;

    let huge = base64_of(2048);
    let oversized = post_comment(commenter.id, publication_id, json!({ "text": "big", "image": huge }));
    expect_error(test::call_service(&app, oversized).await, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/publications/{}/comments", publication_id))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert!(listed.as_array().unwrap().is_empty());

    let anonymous = test::TestRequest::post()
        .uri(&format!("/api/v1/users/{}/publications/{}/comments", commenter.id, publication_id))
        .set_json(json!({ "text": "anon" }))
        .to_request();
    expect_error(test::call_service(&app, anonymous).await, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn publication_edit_and_cascade_delete() {
    let app = app().await;
    let author = signup(&app).await;
    let stranger = signup(&app).await;
    let publication_id = publish(&app, &author, "draft").await;

    let comment = test::TestRequest::post()
        .uri(&format!("/api/v1/users/{}/publications/{}/comments", stranger.id, publication_id))
        .insert_header(stranger.bearer())
        .set_json(json!({ "text": "nice draft" }))
        .to_request();
    assert_eq!(test::call_service(&app, comment).await.status(), StatusCode::CREATED);

    let hijack = test::TestRequest::put()
        .uri(&format!("/api/v1/publications/{}", publication_id))
        .insert_header(stranger.bearer())
        .set_json(json!({ "text": "hacked" }))
        .to_request();
    expect_error(test::call_service(&app, hijack).await, StatusCode::FORBIDDEN, "FORBIDDEN").await;

    let edit = test::TestRequest::put()
        .uri(&format!("/api/v1/publications/{}", publication_id))
        .insert_header(author.bearer())
        .set_json(json!({ "text": "final" }))
        .to_request();
    let edited: Value = test::call_and_read_body_json(&app, edit).await;
    assert_eq!(edited["text"], "final");
    assert!(edited["edition_date"].is_string());

    let by_author = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/publications", author.id))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, by_author).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let delete = test::TestRequest::delete()
        .uri(&format!("/api/v1/publications/{}", publication_id))
        .insert_header(author.bearer())
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::NO_CONTENT);

    let gone = test::TestRequest::get()
        .uri(&format!("/api/v1/publications/{}", publication_id))
        .to_request();
    expect_error(test::call_service(&app, gone).await, StatusCode::NOT_FOUND, "NOT_FOUND").await;

    let comments = test::TestRequest::get()
        .uri(&format!("/api/v1/publications/{}/comments", publication_id))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, comments).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn public_user_lookup() {
    let app = app().await;
    let user = signup(&app).await;

    let req = test::TestRequest::get().uri(&format!("/api/v1/users/{}", user.id)).to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["id"], user.id);

    let missing = test::TestRequest::get().uri("/api/v1/users/999999").to_request();
    expect_error(test::call_service(&app, missing).await, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

/// `len` 바이트 이미지의 base64 표현
fn base64_of(len: usize) -> String {
    use base64::{engine::general_purpose, Engine as _};
    general_purpose::STANDARD.encode(vec![0u8; len])
}
