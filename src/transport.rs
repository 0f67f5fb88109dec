//! HTTP transport for the PS in foodservice API.
//!
//! Owns the blocking reqwest client, the environment base URL, the versioned
//! API prefix and the token slot filled by a login. Every call is a single
//! synchronous round trip; there is no retry, pooling tuning or caching at
//! this layer.
//!
//! Responses are mapped uniformly: a 4xx response body is parsed for the
//! problem-details fields (`detail`, `title`, `message`, `traceId`) and
//! becomes [`PsError::Api`]; 5xx responses map to status 500 and transport
//! failures (DNS, refused connection, timeout) to status 503.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PsError, Result};
use crate::models::TokenSet;

// ---------------------------------------------------------------------------
// ApiErrorBody
// ---------------------------------------------------------------------------

/// Problem-details style error body the API returns on 4xx responses.
/// Some endpoints use `detail`/`title`, the account endpoints use `message`.
#[derive(Debug, Clone, Deserialize, Default)]
struct ApiErrorBody {
    detail: Option<String>,
    title: Option<String>,
    message: Option<String>,
    #[serde(rename = "traceId")]
    trace_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

pub struct Transport {
    http: Client,
    base_url: String,
    api_prefix: String,
    tokens: RefCell<Option<TokenSet>>,
}

impl Transport {
    /// Create a transport against the given base URL.
    ///
    /// `api_prefix` is the versioned path prepended to JSON endpoints
    /// (e.g. `/v7/json`); trailing slashes are stripped.
    pub fn new(base_url: String, api_prefix: String, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_prefix: api_prefix.trim_end_matches('/').to_string(),
            tokens: RefCell::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Switch to a different versioned prefix (e.g. `/v8/json`).
    pub fn set_api_prefix(&mut self, api_prefix: &str) {
        self.api_prefix = api_prefix.trim_end_matches('/').to_string();
    }

    /// Build a versioned API path by prepending the API prefix.
    pub fn api_path(&self, path: &str) -> String {
        format!("{}/{}", self.api_prefix, path.trim_start_matches('/'))
    }

    // -- Token management --------------------------------------------------

    /// Store the tokens from a login or refresh. Subsequent requests carry
    /// the access token as a bearer Authorization header.
    pub fn set_tokens(&self, tokens: TokenSet) {
        *self.tokens.borrow_mut() = Some(tokens);
    }

    pub fn clear_tokens(&self) {
        *self.tokens.borrow_mut() = None;
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens.borrow().as_ref().map(|t| t.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.borrow().as_ref().map(|t| t.refresh_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.borrow().is_some()
    }

    // -- Requests ----------------------------------------------------------

    /// GET a JSON endpoint. An empty response body decodes to `Value::Null`,
    /// matching endpoints that answer 200 with no content.
    pub fn get_value(&self, path: &str) -> Result<Value> {
        let resp = self.send(self.authorize(self.http.get(self.url(path))))?;
        read_value(resp)
    }

    /// POST a JSON body and decode the JSON response.
    pub fn post_value<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let resp = self.send(self.authorize(self.http.post(self.url(path)).json(body)))?;
        read_value(resp)
    }

    /// POST without a body, discarding the response (e.g. logout).
    pub fn post_empty(&self, path: &str) -> Result<()> {
        self.send(self.authorize(self.http.post(self.url(path))))?;
        Ok(())
    }

    /// GET raw bytes with an explicit Accept header (image downloads).
    pub fn get_bytes(&self, path: &str, query: &[(&str, String)], accept: &str) -> Result<Vec<u8>> {
        let req = self
            .http
            .get(self.url(path))
            .query(query)
            .header(ACCEPT, accept);
        let resp = self.send(self.authorize(req))?;
        Ok(resp.bytes()?.to_vec())
    }

    // -- Internals ---------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().map_err(|e| PsError::Api {
            message: e.to_string(),
            status_code: 503,
            trace_id: None,
        })?;

        let status = resp.status();
        if status.is_client_error() {
            let status_code = status.as_u16();
            let body: ApiErrorBody = resp.json().unwrap_or_default();
            let message = body
                .detail
                .or(body.title)
                .or(body.message)
                .unwrap_or_else(|| "Unknown error occurred".to_string());
            Err(PsError::Api {
                message,
                status_code,
                trace_id: body.trace_id,
            })
        } else if status.is_server_error() {
            Err(PsError::Api {
                message: format!("Server error: {}", status),
                status_code: 500,
                trace_id: None,
            })
        } else {
            Ok(resp)
        }
    }
}

/// Decode a response body as JSON, treating an empty body as `null`.
fn read_value(resp: Response) -> Result<Value> {
    let text = resp.text()?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
