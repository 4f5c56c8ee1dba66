//! # Transport — the HTTP seam under [`ApiClient`](crate::ApiClient)
//!
//! [`ApiClient`](crate::ApiClient) never touches reqwest directly; every
//! request goes through the [`Transport`] trait. Production code uses
//! [`HttpTransport`]; tests use [`FakeTransport`], which records what was
//! sent and replays queued responses.

use crate::error::ApiError;

/// HTTP verb of an [`ApiRequest`]. Only the verbs the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully resolved request: absolute URL, verb, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Raw response: status plus undecoded body bytes. Decoding happens in the
/// client so a malformed body surfaces as [`ApiError::Decode`], not as a
/// transport failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait for issuing HTTP requests.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>>;
}

/// Production transport backed by a shared [`reqwest::Client`].
///
/// Sets `Content-Type: application/json` on bodied requests and applies no
/// retries or timeouts beyond reqwest's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        // reqwest errors surfaced here never carry a status (we don't call
        // error_for_status), so these all map to ApiError::Network.
        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ApiError::from)?.to_vec();

        Ok(ApiResponse { status, body })
    }
}
