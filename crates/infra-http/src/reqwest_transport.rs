// Reqwest transport implementation
// Real HTTP adapter behind the HttpTransport port. Joins endpoint paths
// onto a base URL, serializes query pairs, and maps reqwest failures
// into the port's transport errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::debug;

use taskgate_core::port::transport::{
    HttpTransport, Method, RequestBody, RequestSpec, TransportError, TransportReply,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport backed by a shared reqwest client
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Create a transport for a gateway base URL
    ///
    /// # Example
    /// ```ignore
    /// let transport = ReqwestTransport::new("http://127.0.0.1:7000")?;
    /// ```
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let base_url = normalize_base(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::InvalidRequest(format!("client build failed: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// Endpoint paths are relative ("api/task"); without the trailing slash
// Url::join would drop the last path segment of the base.
fn normalize_base(base_url: &str) -> Result<Url, TransportError> {
    let with_slash = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    Url::parse(&with_slash)
        .map_err(|e| TransportError::InvalidRequest(format!("invalid base URL: {}", e)))
}

/// Join an endpoint and its query pairs onto the base URL
pub fn build_url(
    base: &Url,
    endpoint: &str,
    query: &[(String, String)],
) -> Result<Url, TransportError> {
    let mut url = base
        .join(endpoint)
        .map_err(|e| TransportError::InvalidRequest(format!("invalid endpoint: {}", e)))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

fn map_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

// Error statuses are not failures here: they are passed through in the
// reply, and the dispatcher rejects anything outside 2xx before envelope
// parsing.
fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::Connect(err.to_string())
    }
}

fn apply_body(builder: reqwest::RequestBuilder, body: &RequestBody) -> reqwest::RequestBuilder {
    match body {
        RequestBody::Empty => builder,
        RequestBody::Json(value) => builder.json(value),
        RequestBody::Raw {
            bytes,
            content_type,
        } => {
            let builder = builder.body(bytes.clone());
            match content_type {
                Some(content_type) => builder.header(CONTENT_TYPE, content_type),
                None => builder,
            }
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, spec: &RequestSpec) -> Result<TransportReply, TransportError> {
        let url = build_url(&self.base_url, &spec.endpoint, &spec.query)?;
        debug!(method = %spec.method, url = %url, "sending gateway request");

        let request = apply_body(self.client.request(map_method(spec.method), url), &spec.body);

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        debug!(status, bytes = body.len(), "gateway reply received");
        Ok(TransportReply { status, body })
    }
}
