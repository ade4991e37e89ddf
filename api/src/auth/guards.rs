use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::{Model as UserModel, Role};
use sea_orm::DatabaseConnection;
use util::state::AppState;

// --- Role Based Access Guards ---

/// Helper to extract, validate the user from the request and insert the
/// claim back into the request's extensions for downstream handlers.
async fn extract_and_insert_authuser(
    mut req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiError>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;

    req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Helper to check the role tag on the claimed subject's user record.
///
/// The lookup runs fresh on every request; the decision is never cached.
/// A data-store error propagates as a 500 rather than being converted
/// into an authorization decision.
async fn user_has_role(
    db: &DatabaseConnection,
    email: &str,
    role: Role,
) -> Result<bool, (StatusCode, Json<ApiError>)> {
    UserModel::has_role(db, email, role).await.map_err(|e| {
        tracing::error!(error = %e, email, %role, "DB error while checking role");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new("internal server error")),
        )
    })
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Base role guard that the admin/instructor guards build upon.
///
/// Authenticates first, then requires the claimed subject's user record to
/// carry exactly `required_role`. Absent records are forbidden.
async fn allow_role_base(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
    required_role: Role,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let db = app_state.db();

    let (req, user) = extract_and_insert_authuser(req).await?;

    if user_has_role(db, &user.0.sub, required_role).await? {
        Ok(next.run(req).await)
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(ApiError::new("forbidden message")),
        ))
    }
}

/// Admin-only guard.
pub async fn allow_admin(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    allow_role_base(State(app_state), req, next, Role::Admin).await
}

/// Instructor-only guard.
pub async fn allow_instructor(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    allow_role_base(State(app_state), req, next, Role::Instructor).await
}
