use crate::ENDPOINT;
use url::Url;

fn default_endpoint() -> Url {
    Url::parse(ENDPOINT).expect("`ENDPOINT` is a valid url")
}

/// Client config
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClientConfig {
    /// The api key.
    ///
    /// Sent as an empty string if unset.
    #[serde(default)]
    pub api_key: Option<String>,

    /// An optional proxy to send requests through
    #[serde(default)]
    pub proxy: Option<Url>,

    /// The api base url
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
}

impl ClientConfig {
    /// Make a config with no api key and no proxy that targets [`ENDPOINT`].
    pub fn new() -> Self {
        Self {
            api_key: None,
            proxy: None,
            endpoint: default_endpoint(),
        }
    }

    /// Make a config, letting `f` fill in the values.
    pub fn configure<F>(f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::new();
        f(&mut config);
        config
    }

    /// Set the api key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the proxy
    pub fn proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Set the endpoint
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// The api key as sent in the `key` query parameter.
    pub(crate) fn key_param(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
