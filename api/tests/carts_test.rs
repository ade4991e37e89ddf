use api::auth::generate_jwt;
use api::routes::routes;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::models::class;
use db::test_utils::setup_test_db;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::{Value, json};
use tower::ServiceExt;
use util::state::AppState;

fn init_test_env() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| unsafe {
        std::env::set_var("JWT_SECRET", "carts-test-secret");
    });
}

async fn setup() -> (Router, AppState) {
    init_test_env();
    let state = AppState::new(setup_test_db().await);
    (routes(state.clone()), state)
}

async fn seed_class(state: &AppState) -> class::Model {
    class::ActiveModel {
        name: Set("Japanese 101".into()),
        image: Set(None),
        instructor_name: Set("Sensei".into()),
        instructor_email: Set("sensei@x.com".into()),
        available_seats: Set(10),
        price: Set(49.99),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .unwrap()
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", t));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn cart_routes_require_a_credential() {
    let (app, _state) = setup().await;

    let res = app
        .oneshot(request("GET", "/carts?email=u@x.com", None, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(res).await["message"], "unauthorized access");
}

#[tokio::test]
async fn cart_listing_is_identity_matched() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .oneshot(request("GET", "/carts?email=other@x.com", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let json = body_json(res).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "forbidden access");
}

#[tokio::test]
async fn cart_listing_without_email_is_empty() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .oneshot(request("GET", "/carts", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn add_list_delete_round_trip() {
    let (app, state) = setup().await;
    let class = seed_class(&state).await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .clone()
        .oneshot(request(
            "POST",
            "/carts",
            Some(&token),
            Some(json!({ "class_id": class.id, "email": "u@x.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let stored = body_json(res).await;
    assert_eq!(stored["class_id"], class.id);
    let cart_id = stored["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(request("GET", "/carts?email=u@x.com", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed = body_json(res).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let res = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/carts/{}", cart_id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "deleted": true }));

    let res = app
        .oneshot(request("GET", "/carts?email=u@x.com", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn deleting_a_missing_cart_item_reports_false() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .oneshot(request("DELETE", "/carts/999", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "deleted": false }));
}
