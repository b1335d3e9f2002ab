use crate::server::error::AppError;

/// Parses a record id taken from a route segment.
///
/// Store keys are positive integers, so anything else cannot name a stored
/// record and yields `None`.
pub fn parse_id(value: &str) -> Option<i32> {
    value.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Parses the optional `cursor` query parameter of a collection route.
///
/// # Returns
/// - `Ok(None)` - No cursor supplied, start from the first page
/// - `Ok(Some(i32))` - Key of the last record on the previous page
/// - `Err(AppError::BadRequest)` - Cursor is not a valid key
pub fn parse_cursor(value: Option<&str>) -> Result<Option<i32>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_id(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest("Invalid pagination cursor".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integer_ids() {
        assert_eq!(parse_id("42"), Some(42));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive_ids() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("4x"), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn missing_cursor_starts_at_first_page() {
        assert!(matches!(parse_cursor(None), Ok(None)));
    }

    #[test]
    fn malformed_cursor_is_bad_request() {
        let result = parse_cursor(Some("not-a-key"));

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid pagination cursor"));
    }
}
