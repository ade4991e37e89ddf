pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use util::config;

/// Generates a JWT and its expiry timestamp for a given subject email.
///
/// The token is signed with the shared `JWT_SECRET` and expires after
/// `JWT_DURATION_MINUTES` (one hour by default). Reissuing for the same
/// email produces a new, independently valid token; there is no
/// uniqueness or revocation guarantee.
pub fn generate_jwt(email: &str) -> (String, String) {
    let jwt_secret = config::jwt_secret();
    let jwt_duration_minutes = config::jwt_duration_minutes() as i64;

    let now = Utc::now();
    let expiry = now + Duration::minutes(jwt_duration_minutes);

    let claims = Claims {
        sub: email.to_owned(),
        iat: now.timestamp() as usize,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
