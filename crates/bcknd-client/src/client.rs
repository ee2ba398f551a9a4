//! Backend client handle
//!
//! One [`ApiClient`] is built at startup and handed to whatever needs to talk
//! to the backend. Cloning it is cheap and clones share the connection pool
//! and cookie jar.

use bcknd_config::BackendConfig;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, Method, RequestBuilder};
use tracing::info;

use crate::error::Result;

/// Cookies are stored from responses and sent back on every request
const WITH_CREDENTIALS: bool = true;

lazy_static! {
    /// `scheme://` in any case, or protocol-relative `//host`
    static ref ABSOLUTE_URL: Regex = Regex::new(r"^([A-Za-z][A-Za-z0-9+.-]*:)?//").unwrap();
}

/// HTTP client bound to the backend base URL, with credentials enabled
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    with_credentials: bool,
    inner: Client,
}

impl ApiClient {
    /// Build the handle for `config`.
    ///
    /// Nothing is sent over the network here; a bad host or port only shows up
    /// as an error once a request is dispatched.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = config.base_url();
        let inner = Client::builder().cookie_store(WITH_CREDENTIALS).build()?;

        info!(base_url = %base_url, with_credentials = WITH_CREDENTIALS, "Backend client configured");

        Ok(Self {
            base_url,
            with_credentials: WITH_CREDENTIALS,
            inner,
        })
    }

    /// Build the handle from `BCKND_HOST` / `BCKND_PORT`
    pub fn from_env() -> Result<Self> {
        let config = BackendConfig::from_env()?;
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether cookies are stored from responses and attached to requests
    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// The underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Resolve `path` against the base URL.
    ///
    /// Absolute URLs (any `scheme://`, or `//host`) pass through untouched.
    pub fn url(&self, path: &str) -> String {
        if ABSOLUTE_URL.is_match(path) {
            return path.to_string();
        }

        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner.request(method, self.url(path))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }
}
