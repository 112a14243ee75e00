use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use storage::error::StorageError;

use crate::error::{WebError, WebResult};

/// JSON body extractor whose rejections become `400` with the usual error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct AppJson<T>(pub T);

/// Path extractor whose rejections become `400` with the usual error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WebError))]
pub struct AppPath<T>(pub T);

/// Parse an `:id` path segment. A segment that is not an `i64` cannot name a
/// stored row, so it is reported as `entity` not found.
pub fn record_id(raw: &str, entity: &'static str) -> WebResult<i64> {
    raw.parse()
        .map_err(|_| WebError::Storage(StorageError::NotFound(entity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parses_integers() {
        assert_eq!(record_id("42", "Workout").unwrap(), 42);
    }

    #[test]
    fn test_unparseable_record_id_is_not_found() {
        for raw in ["abc", "1.5", "99999999999999999999"] {
            let err = record_id(raw, "Weight entry").unwrap_err();
            assert!(matches!(
                err,
                WebError::Storage(StorageError::NotFound("Weight entry"))
            ));
        }
    }
}
