use api::auth::generate_jwt;
use api::routes::routes;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::models::user::{Model as UserModel, Role};
use db::test_utils::setup_test_db;
use serde_json::{Value, json};
use tower::ServiceExt;
use util::state::AppState;

fn init_test_env() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| unsafe {
        std::env::set_var("JWT_SECRET", "users-test-secret");
    });
}

async fn setup() -> (Router, AppState) {
    init_test_env();
    let state = AppState::new(setup_test_db().await);
    (routes(state.clone()), state)
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn patch(uri: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn admin_flag_follows_the_user_record() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("a@x.com");

    // No record yet: the query answers false rather than 404.
    let res = app
        .clone()
        .oneshot(get_with_token("/users/admin/a@x.com", &token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "admin": false }));

    // Create the record, then promote it.
    let res = app
        .clone()
        .oneshot(post_json("/users", json!({ "name": "A", "email": "a@x.com" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = body_json(res).await;
    assert_eq!(created["role"], "none");
    let id = created["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(patch(&format!("/users/{}/admin", id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["role"], "admin");

    let res = app
        .oneshot(get_with_token("/users/admin/a@x.com", &token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "admin": true }));
}

#[tokio::test]
async fn role_query_requires_matching_subject() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("a@x.com");

    let res = app
        .oneshot(get_with_token("/users/admin/b@x.com", &token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let json = body_json(res).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "forbidden access");
}

#[tokio::test]
async fn role_query_requires_a_credential() {
    let (app, _state) = setup().await;

    let res = app
        .oneshot(
            Request::builder()
                .uri("/users/admin/a@x.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(res).await["message"], "unauthorized access");
}

#[tokio::test]
async fn instructor_query_mirrors_the_admin_query() {
    let (app, state) = setup().await;
    let (user, _) = UserModel::create_if_absent(state.db(), "Sensei", "sensei@x.com")
        .await
        .unwrap();
    UserModel::set_role(state.db(), user.id, Role::Instructor)
        .await
        .unwrap();
    let (token, _) = generate_jwt("sensei@x.com");

    let res = app
        .oneshot(get_with_token("/users/instructor/sensei@x.com", &token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "instructor": true }));
}

#[tokio::test]
async fn listing_users_is_admin_only() {
    let (app, state) = setup().await;

    UserModel::create_if_absent(state.db(), "Plain", "plain@x.com")
        .await
        .unwrap();
    let (boss, _) = UserModel::create_if_absent(state.db(), "Boss", "boss@x.com")
        .await
        .unwrap();
    UserModel::set_role(state.db(), boss.id, Role::Admin)
        .await
        .unwrap();

    let (plain_token, _) = generate_jwt("plain@x.com");
    let (boss_token, _) = generate_jwt("boss@x.com");

    let res = app
        .clone()
        .oneshot(get_with_token("/users", &plain_token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app
        .oneshot(get_with_token("/users", &boss_token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed = body_json(res).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn creating_a_user_twice_returns_the_existing_record() {
    let (app, _state) = setup().await;
    let body = json!({ "name": "A", "email": "a@x.com" });

    let res = app
        .clone()
        .oneshot(post_json("/users", body.clone()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let first = body_json(res).await;

    let res = app.oneshot(post_json("/users", body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let second = body_json(res).await;

    assert_eq!(first["id"], second["id"]);
}

#[tokio::test]
async fn creating_a_user_validates_the_email() {
    let (app, _state) = setup().await;

    let res = app
        .oneshot(post_json("/users", json!({ "name": "A", "email": "nope" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["message"], "Invalid email format");
}

#[tokio::test]
async fn promoting_a_missing_user_is_not_found() {
    let (app, _state) = setup().await;

    let res = app.oneshot(patch("/users/999/admin")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
