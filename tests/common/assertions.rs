//! Custom assertion macros and utilities
//!
//! Provides assertion helpers with descriptive failure output for API
//! responses.

use axum::http::StatusCode;
use axum_test::TestResponse;
use blogpost::backend::error::ErrorBody;
use pretty_assertions::assert_eq;

/// Assert the status of a response, printing the body on failure
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status_code(),
            $status,
            "unexpected status, body: {}",
            $response.text()
        );
    };
}

/// Assert an error response: status code and the `{"error", "status"}` body
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    crate::assert_status!(response, status);
    let body: ErrorBody = response.json();
    assert_eq!(
        body,
        ErrorBody {
            error: message.to_string(),
            status: status.as_u16(),
        }
    );
}
