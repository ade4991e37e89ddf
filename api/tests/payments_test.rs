use api::auth::generate_jwt;
use api::routes::routes;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::models::{cart_item, class};
use db::test_utils::setup_test_db;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;
use util::config::AppConfig;
use util::state::AppState;

fn init_test_env() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| unsafe {
        std::env::set_var("JWT_SECRET", "payments-test-secret");
    });
}

async fn setup() -> (Router, AppState) {
    init_test_env();
    let state = AppState::new(setup_test_db().await);
    (routes(state.clone()), state)
}

async fn seed_cart_item(state: &AppState, email: &str) -> cart_item::Model {
    let class = class::ActiveModel {
        name: Set("French A1".into()),
        image: Set(None),
        instructor_name: Set("Prof".into()),
        instructor_email: Set("prof@x.com".into()),
        available_seats: Set(8),
        price: Set(79.0),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .unwrap();

    cart_item::ActiveModel {
        class_id: Set(class.id),
        user_email: Set(email.into()),
        created_at: Set(chrono::Utc::now()),
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
async fn payment_routes_require_a_credential() {
    let (app, _state) = setup().await;

    let res = app
        .clone()
        .oneshot(request("GET", "/payments?email=u@x.com", None, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(res).await["message"], "unauthorized access");

    let res = app
        .oneshot(request(
            "POST",
            "/payments/create-payment-intent",
            None,
            Some(json!({ "price": 10.0 })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn payment_history_is_identity_matched() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .oneshot(request(
            "GET",
            "/payments?email=other@x.com",
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let json = body_json(res).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "forbidden access");
}

#[tokio::test]
async fn recording_a_payment_clears_the_paid_cart_items() {
    let (app, state) = setup().await;
    let item = seed_cart_item(&state, "u@x.com").await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .clone()
        .oneshot(request(
            "POST",
            "/payments",
            Some(&token),
            Some(json!({
                "email": "u@x.com",
                "transaction_id": "pi_test_123",
                "amount": 79.0,
                "class_ids": [item.class_id],
                "cart_ids": [item.id],
            })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let stored = body_json(res).await;
    assert_eq!(stored["deleted_cart_items"], 1);
    assert_eq!(stored["payment"]["transaction_id"], "pi_test_123");

    // The cart is empty and the payment shows up in the history.
    let res = app
        .clone()
        .oneshot(request("GET", "/carts?email=u@x.com", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(body_json(res).await, json!([]));

    let res = app
        .oneshot(request("GET", "/payments?email=u@x.com", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let history = body_json(res).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn recording_a_payment_validates_the_body() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .oneshot(request(
            "POST",
            "/payments",
            Some(&token),
            Some(json!({
                "email": "not-an-email",
                "transaction_id": "pi_1",
                "amount": 1.0,
                "class_ids": [],
                "cart_ids": [],
            })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["message"], "Invalid email format");
}

#[tokio::test]
#[serial]
async fn payment_intent_rejects_prices_below_the_minimum() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    let res = app
        .oneshot(request(
            "POST",
            "/payments/create-payment-intent",
            Some(&token),
            Some(json!({ "price": 0.25 })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(res).await["message"],
        "price must be at least 0.50"
    );
}

#[tokio::test]
#[serial]
async fn unreachable_provider_is_a_bad_gateway() {
    let (app, _state) = setup().await;
    let (token, _) = generate_jwt("u@x.com");

    // Point the provider base at a closed port; restore it afterwards.
    AppConfig::set_stripe_api_base("http://127.0.0.1:1");

    let res = app
        .oneshot(request(
            "POST",
            "/payments/create-payment-intent",
            Some(&token),
            Some(json!({ "price": 10.0 })),
        ))
        .await
        .unwrap();

    AppConfig::set_stripe_api_base("https://api.stripe.com");

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(res).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "payment provider error");
}
