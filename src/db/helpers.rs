//! Small helpers that turn database results into JSON error responses.
//!
//! ```ignore
//! let user = require_record(get_user_by_id(pool, id).await, "User not found")?;
//! ```

use actix_web::HttpResponse;
use serde_json::json;

/// Result type for lookups that answer with an `HttpResponse` on failure.
pub type DbResult<T> = Result<T, HttpResponse>;

/// `{"error": message}` with the given builder.
pub fn json_error(mut builder: actix_web::HttpResponseBuilder, message: impl Into<String>) -> HttpResponse {
    builder.json(json!({ "error": message.into() }))
}

/// Unwrap an optional database result, 404 when absent, 500 on a query error.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(json_error(HttpResponse::NotFound(), not_found_message)),
        Err(e) => Err(database_failure(e)),
    }
}

/// Log a query error and answer with a generic 500.
pub fn database_failure(e: sqlx::Error) -> HttpResponse {
    tracing::error!("Database error: {}", e);
    json_error(HttpResponse::InternalServerError(), "Database error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn present_record_is_returned() {
        let record = require_record(Ok(Some(7)), "missing").unwrap();
        assert_eq!(record, 7);
    }

    #[test]
    fn absent_record_is_a_404() {
        let response = require_record::<i32>(Ok(None), "User not found").unwrap_err();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn query_error_is_a_500() {
        let response = require_record::<i32>(Err(sqlx::Error::RowNotFound), "User not found").unwrap_err();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
