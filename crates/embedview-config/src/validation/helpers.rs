//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Check one extra header with the same parser the request builder uses.
pub(crate) fn validate_header(errors: &mut Vec<String>, name: &str, value: &str) {
    if http::HeaderName::from_bytes(name.as_bytes()).is_err() {
        errors.push(format!("session.headers: {name:?} is not a valid header name"));
    }
    if http::HeaderValue::from_str(value).is_err() {
        errors.push(format!("session.headers: value of {name:?} is not a valid header value"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_accepts_bounds() {
        let mut errors = Vec::new();
        validate_range(&mut errors, "w", 200, 200, 8192);
        validate_range(&mut errors, "w", 8192, 200, 8192);
        assert!(errors.is_empty());
    }

    #[test]
    fn range_reports_name_and_value() {
        let mut errors = Vec::new();
        validate_range(&mut errors, "window.width", 10, 200, 8192);
        assert_eq!(errors, vec!["window.width = 10 is out of range [200, 8192]"]);
    }

    #[test]
    fn header_accepts_tokens_and_visible_values() {
        let mut errors = Vec::new();
        validate_header(&mut errors, "X-Client", "v1");
        validate_header(&mut errors, "accept", "text/html, */*;q=0.8");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn header_rejects_bad_names() {
        for name in ["", "X Client", "X-Client:"] {
            let mut errors = Vec::new();
            validate_header(&mut errors, name, "v");
            assert_eq!(errors.len(), 1, "name {name:?}");
            assert!(errors[0].contains("header name"));
        }
    }

    #[test]
    fn header_rejects_control_characters_in_values() {
        let mut errors = Vec::new();
        validate_header(&mut errors, "X-Token", "a\nb");
        assert_eq!(
            errors,
            vec!["session.headers: value of \"X-Token\" is not a valid header value"]
        );
    }
}
