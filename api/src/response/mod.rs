use serde::Serialize;

/// Standardized error body for all rejected requests.
///
/// Every gate failure and handler error produces this structure:
/// ```json
/// {
///   "error": true,
///   "message": "unauthorized access"
/// }
/// ```
///
/// Successful responses return their payload directly (a list, a record,
/// or a small object such as `{"admin": true}`), so there is no success
/// wrapper here.
#[derive(Debug, Serialize, Default)]
pub struct ApiError {
    pub error: bool,
    pub message: String,
}

impl ApiError {
    /// Constructs an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}
