use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Static bearer-token check.
#[derive(Clone)]
pub struct BearerAuth {
    expected: Vec<u8>,
}

impl BearerAuth {
    pub fn new(token: &str) -> Self {
        Self {
            expected: format!("Bearer {token}").into_bytes(),
        }
    }

    /// True only if `Authorization` equals `Bearer <token>` exactly.
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        headers
            .get(AUTHORIZATION)
            .is_some_and(|value| constant_time_eq(value.as_bytes(), &self.expected))
    }
}

/// Byte comparison whose timing does not depend on where inputs differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    #[test]
    fn exact_bearer_matches() {
        let auth = BearerAuth::new("s3cret");
        assert!(auth.is_authorized(&headers("Bearer s3cret")));
    }

    #[test]
    fn anything_else_is_rejected() {
        let auth = BearerAuth::new("s3cret");
        assert!(!auth.is_authorized(&HeaderMap::new()));
        assert!(!auth.is_authorized(&headers("Bearer s3cre")));
        assert!(!auth.is_authorized(&headers("bearer s3cret")));
        assert!(!auth.is_authorized(&headers("Bearer s3cret ")));
        assert!(!auth.is_authorized(&headers("s3cret")));
    }
}
