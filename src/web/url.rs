use crate::erx;
use crate::erx::ResultEX;

/// Join two url path
pub fn join(base: &str, other: &str) -> String {
    let be = base.ends_with("/");
    let os = other.starts_with("/");
    if be && os {
        return format!("{}{}", base, other[1..].to_string());
    }

    if !be && !os {
        return format!("{}/{}", base, other);
    }

    format!("{}{}", base, other)
}

/// Url encode
pub fn url_encode(val: &str) -> String {
    url::form_urlencoded::byte_serialize(val.as_bytes()).collect::<String>()
}

/// Url decode
pub fn url_decode(val: &str) -> String {
    percent_encoding::percent_decode(val.as_bytes()).decode_utf8().unwrap_or_default().into()
}

/// Check a route path: must start with '/', carry no whitespace or control
/// characters, and percent-escapes must decode.
pub fn validate_path(path: &str) -> ResultEX {
    if !path.starts_with('/') {
        return Err(erx::invalid_path(path));
    }

    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(erx::invalid_path(path));
    }

    if percent_encoding::percent_decode(path.as_bytes()).decode_utf8().is_err() {
        return Err(erx::invalid_path(path));
    }

    Ok(())
}

/// Check an inclusion prefix: empty is allowed, otherwise same rules as a
/// route path plus no trailing '/'. The prefix is concatenated literally in
/// front of every imported path, a trailing slash would double up.
pub fn validate_prefix(prefix: &str) -> ResultEX {
    if prefix.is_empty() {
        return Ok(());
    }

    validate_path(prefix)?;

    if prefix.ends_with('/') {
        return Err(erx::invalid_path(prefix));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_slash_combinations() {
        assert_eq!(join("/api/", "/items"), "/api/items");
        assert_eq!(join("/api", "items"), "/api/items");
        assert_eq!(join("/api", "/items"), "/api/items");
        assert_eq!(join("/api/", "items"), "/api/items");
    }

    #[test]
    fn encode_decode() {
        assert_eq!(url_encode("a b"), "a+b");
        assert_eq!(url_decode("a%20b"), "a b");
    }

    #[test]
    fn path_validation() {
        assert!(validate_path("/items/{id}").is_ok());
        assert!(validate_path("items").is_err());
        assert!(validate_path("/has space").is_err());
        assert!(validate_path("/bad%ff%fe").is_err());
    }

    #[test]
    fn prefix_validation() {
        assert!(validate_prefix("").is_ok());
        assert!(validate_prefix("/api/v1").is_ok());
        assert!(validate_prefix("api").is_err());
        assert!(validate_prefix("/api/").is_err());
    }
}
