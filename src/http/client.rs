use std::collections::HashMap;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;

use super::response::ApiResponse;
use crate::config::HarnessConfig;
use crate::error::Error;

/// HTTP client rooted at a base URL.
///
/// Every request goes to `base_url` + `path` and carries the configured
/// default headers. The client applies no retries and no authentication;
/// whatever the service answers is captured verbatim into an
/// [`ApiResponse`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(config: &HarnessConfig) -> Result<Self, Error> {
        Url::parse(&config.base_url).map_err(|_| Error::InvalidUrl(config.base_url.clone()))?;

        let headers = build_headers(&config.default_headers)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        self.send(Method::GET, path, &[], None).await
    }

    pub async fn get_query(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse, Error> {
        self.send(Method::GET, path, query, None).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse, Error> {
        self.send(Method::POST, path, &[], Some(serde_json::to_string(body)?)).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse, Error> {
        self.send(Method::PUT, path, &[], Some(serde_json::to_string(body)?)).await
    }

    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse, Error> {
        self.send(Method::PATCH, path, &[], Some(serde_json::to_string(body)?)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, Error> {
        self.send(Method::DELETE, path, &[], None).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<ApiResponse, Error> {
        let url = self.endpoint(path);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers.clone());

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let started = Instant::now();
        let response = builder.send().await?;
        let duration_ms = started.elapsed().as_millis();

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            headers.insert(
                name.as_str().to_ascii_lowercase(),
                value.to_str().unwrap_or_default().to_string(),
            );
        }

        let bytes = response.bytes().await?;
        let size_bytes = bytes.len();
        let body = String::from_utf8_lossy(&bytes).into_owned();

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            duration_ms = duration_ms as u64,
            "request completed"
        );

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
            duration_ms,
            size_bytes,
        })
    }
}

fn build_headers(input: &[(String, String)]) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    for (key, value) in input {
        if key.is_empty() {
            continue;
        }

        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| Error::InvalidHeader(key.clone()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(key.clone()))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = HarnessConfig::default();
        let client = ApiClient::new(&config).unwrap();
        let expected = format!("{}/posts/1", config.base_url);
        assert_eq!(client.endpoint("/posts/1"), expected);
        assert_eq!(client.endpoint("posts/1"), expected);
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let config = HarnessConfig {
            base_url: "not a url".to_string(),
            ..HarnessConfig::default()
        };
        assert!(matches!(ApiClient::new(&config), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn build_headers_rejects_bad_name() {
        let input = vec![("bad header".to_string(), "x".to_string())];
        assert!(matches!(build_headers(&input), Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn build_headers_skips_empty_keys() {
        let input = vec![
            (String::new(), "ignored".to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ];
        let headers = build_headers(&input).unwrap();
        assert_eq!(headers.len(), 1);
    }
}
