use std::time::Duration;

use async_trait::async_trait;
use client_logging::client_debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use url::Url;

use crate::{ApiError, Contact};

/// Characters escaped when an email is embedded as a path segment. Matches
/// the `encodeURIComponent` set: everything except ASCII alphanumerics and
/// `-_.!~*'()`.
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a value for use as a single URL path segment, so that
/// `a b@x.com` becomes `a%20b%40x.com`.
pub fn encode_path_component(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_COMPONENT).to_string()
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Remote `/contacts` operations. A trait seam so tests and embedders can
/// substitute the transport.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Fetches the full contact collection, optionally filtered by name
    /// substring.
    async fn list(&self, name_filter: Option<&str>) -> Result<Vec<Contact>, ApiError>;

    /// Creates a contact. No client-side dedup; the server decides about
    /// duplicates.
    async fn create(&self, contact: &Contact) -> Result<(), ApiError>;

    /// Replaces the contact stored under `email`.
    async fn update(&self, email: &str, contact: &Contact) -> Result<(), ApiError>;

    /// Deletes the contact stored under `email`.
    async fn delete(&self, email: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestContactsApi {
    base: String,
    client: reqwest::Client,
}

impl ReqwestContactsApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base = settings.base_url.trim_end_matches('/').to_string();
        Url::parse(&base).map_err(|err| ApiError::InvalidBaseUrl(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { base, client })
    }

    fn collection_url(&self) -> String {
        format!("{}/contacts", self.base)
    }

    fn member_url(&self, email: &str) -> String {
        format!("{}/contacts/{}", self.base, encode_path_component(email))
    }
}

#[async_trait]
impl ContactsApi for ReqwestContactsApi {
    async fn list(&self, name_filter: Option<&str>) -> Result<Vec<Contact>, ApiError> {
        let url = self.collection_url();
        client_debug!("GET {}", url);
        let mut request = self.client.get(&url);
        if let Some(name) = name_filter {
            request = request.query(&[("name", name)]);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let response = check_status(response).await?;
        response
            .json::<Vec<Contact>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn create(&self, contact: &Contact) -> Result<(), ApiError> {
        let url = self.collection_url();
        client_debug!("POST {} email={}", url, contact.email);
        let response = self
            .client
            .post(&url)
            .json(contact)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).await.map(|_| ())
    }

    async fn update(&self, email: &str, contact: &Contact) -> Result<(), ApiError> {
        let url = self.member_url(email);
        client_debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(contact)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).await.map(|_| ())
    }

    async fn delete(&self, email: &str) -> Result<(), ApiError> {
        let url = self.member_url(email);
        client_debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).await.map(|_| ())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Maps non-2xx responses to `ApiError::Status`, recovering the server's
/// JSON `detail` message when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.detail);

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
