use serde::{Deserialize, Serialize};

/// Verified content of a bearer credential.
///
/// Lives only for the duration of one request's processing; never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject identifier: the user's email address.
    pub sub: String,
    /// Issued-at time (seconds since epoch).
    pub iat: usize,
    /// Expiry time (seconds since epoch).
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
