use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Raw outcome of one HTTP exchange.
///
/// Status and body are handed back uninterpreted; deciding what counts as
/// success belongs to the caller.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport capability injected into [`MoodClient`](crate::MoodClient).
///
/// Implementations must not retry; one call maps to at most one request on
/// the wire.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `body` (as JSON, when present) to `path` relative to the backend.
    async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>>;
}

/// [`HttpClient`] backed by [`reqwest::Client`].
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestHttpClient {
    /// Creates a client rooted at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client reusing an existing connection pool.
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        tracing::trace!(%url, "posting to backend");
        let mut req = self.client.post(url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    /// Given a JSON body, when posted, then it arrives verbatim with a JSON
    /// content type.
    #[tokio::test]
    async fn posts_json_body_with_content_type() {
        // Arrange
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/text")
                    .header("content-type", "application/json")
                    .body(r#"{"text":"hello"}"#);
                then.status(200).json_body(json!({"mood": "happy"}));
            })
            .await;
        let client = ReqwestHttpClient::new(server.url("").parse().unwrap());

        // Act
        let resp = client
            .post("/text", Some(&json!({"text": "hello"})))
            .await
            .unwrap();

        // Assert
        assert!(resp.is_success());
        mock.assert_async().await;
    }

    /// When no body is supplied, then the request body is empty.
    #[tokio::test]
    async fn posts_empty_body_without_payload() {
        // Arrange
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/face").body("");
                then.status(200).json_body(json!({"mood": "calm"}));
            })
            .await;
        let client = ReqwestHttpClient::new(server.url("").parse().unwrap());

        // Act
        let resp = client.post("/face", None).await.unwrap();

        // Assert
        assert_eq!(resp.status, 200);
        mock.assert_async().await;
    }

    /// Non-2xx statuses are returned, not turned into transport errors.
    #[tokio::test]
    async fn surfaces_error_statuses_verbatim() {
        // Arrange
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/voice");
                then.status(500).body("backend exploded");
            })
            .await;
        let client = ReqwestHttpClient::new(server.url("").parse().unwrap());

        // Act
        let resp = client.post("/voice", None).await.unwrap();

        // Assert
        assert!(!resp.is_success());
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, b"backend exploded".to_vec());
    }
}
