use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    GET,
    POST,
    DELETE,
    PUT,
    HEAD,
    OPTIONS,
    TRACE,
    PATCH,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => { "GET" }
            HttpMethod::POST => { "POST" }
            HttpMethod::DELETE => { "DELETE" }
            HttpMethod::PUT => { "PUT" }
            HttpMethod::HEAD => { "HEAD" }
            HttpMethod::OPTIONS => { "OPTIONS" }
            HttpMethod::TRACE => { "TRACE" }
            HttpMethod::PATCH => { "PATCH" }
        }
    }

    pub fn is(&self, method: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(method)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "DELETE" => Ok(HttpMethod::DELETE),
            "PUT" => Ok(HttpMethod::PUT),
            "HEAD" => Ok(HttpMethod::HEAD),
            "OPTIONS" => Ok(HttpMethod::OPTIONS),
            "TRACE" => Ok(HttpMethod::TRACE),
            "PATCH" => Ok(HttpMethod::PATCH),
            _ => Err(format!("unknown http method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_is_case_insensitive() {
        assert!(HttpMethod::GET.is("get"));
        assert!(HttpMethod::PATCH.is("Patch"));
        assert!(!HttpMethod::POST.is("PUT"));
    }

    #[test]
    fn method_from_str() {
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::DELETE);
        assert!("FETCH".parse::<HttpMethod>().is_err());
    }
}
