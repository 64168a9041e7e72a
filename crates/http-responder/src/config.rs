use little_chat_responder::CHAT_ENDPOINT;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Builder for [`HttpResponderConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HttpResponderConfigBuilder {
    base_url: Option<String>,
    endpoint: Option<String>,
}

impl HttpResponderConfigBuilder {
    /// Creates a builder with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server root, e.g. `https://chat.example.com`.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a custom endpoint path instead of [`CHAT_ENDPOINT`].
    #[inline]
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpResponderConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        HttpResponderConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            endpoint: self
                .endpoint
                .unwrap_or_else(|| CHAT_ENDPOINT.to_string()),
        }
    }
}

/// Configuration for the HTTP responder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpResponderConfig {
    pub(crate) base_url: String,
    pub(crate) endpoint: String,
}

impl HttpResponderConfig {
    /// Returns the full URL queries are posted to.
    #[inline]
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}
