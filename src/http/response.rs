use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// An already-received HTTP response.
///
/// Holds everything a check needs: the status code, the response headers
/// keyed by lowercased name, and the raw body. The body is kept as text and
/// decoded on demand; [`ApiResponse::json`] can be called any number of
/// times with the same outcome.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub duration_ms: u128,
    pub size_bytes: usize,
}

impl ApiResponse {
    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value, Error> {
        let value = serde_json::from_str(&self.body)?;
        Ok(value)
    }

    /// Decode the body into a typed value.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = serde_json::from_str(&self.body)?;
        Ok(value)
    }

    /// Look up a response header, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &str) -> ApiResponse {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            "application/json; charset=utf-8".to_string(),
        );
        ApiResponse {
            status,
            status_text: "OK".to_string(),
            headers,
            body: body.to_string(),
            duration_ms: 0,
            size_bytes: body.len(),
        }
    }

    #[test]
    fn json_decodes_object_body() {
        let resp = make_response(200, r#"{"id": 1}"#);
        let value = resp.json().unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn json_is_idempotent() {
        let resp = make_response(200, r#"[1, 2, 3]"#);
        assert_eq!(resp.json().unwrap(), resp.json().unwrap());
    }

    #[test]
    fn json_rejects_invalid_body() {
        let resp = make_response(200, "not json");
        assert!(matches!(resp.json(), Err(Error::Decode(_))));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = make_response(200, "{}");
        assert_eq!(
            resp.header("Content-Type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(resp.header("x-missing"), None);
    }
}
