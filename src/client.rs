use crate::{
    response,
    usernames,
    ClientConfig,
    Envelope,
    IntoUsernames,
    KloutResult,
    User,
};
use std::sync::Arc;
use tracing::{
    debug,
    warn,
};
use url::Url;

const SCORE_PATH: &str = "/1/klout.json";
const PROFILE_PATH: &str = "/1/users/show.json";
const TOPICS_PATH: &str = "/1/users/topics.json";
const INFLUENCED_BY_PATH: &str = "/1/soi/influenced_by.json";
const INFLUENCER_OF_PATH: &str = "/1/soi/influencer_of.json";

/// Client for the Klout api
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    config: Arc<ClientConfig>,
}

impl Client {
    /// Make a new client from a config.
    ///
    /// # Errors
    /// Fails if the proxy is rejected or the http client cannot be built.
    pub fn new(config: ClientConfig) -> KloutResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = config.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }

        Ok(Self {
            client: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Make a new client, letting `f` fill in the config.
    pub fn configure<F>(f: F) -> KloutResult<Self>
    where
        F: FnOnce(&mut ClientConfig),
    {
        Self::new(ClientConfig::configure(f))
    }

    /// Get the config
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Retrieve the Klout score for the given usernames.
    pub async fn score(&self, usernames: impl IntoUsernames) -> KloutResult<Vec<User>> {
        self.get_users(SCORE_PATH, usernames).await
    }

    /// Retrieve the Klout profile for the given usernames.
    pub async fn profile(&self, usernames: impl IntoUsernames) -> KloutResult<Vec<User>> {
        self.get_users(PROFILE_PATH, usernames).await
    }

    /// Retrieve the topics for the given usernames.
    pub async fn topics(&self, usernames: impl IntoUsernames) -> KloutResult<Vec<User>> {
        self.get_users(TOPICS_PATH, usernames).await
    }

    /// Retrieve the users that influence the given usernames.
    pub async fn influenced_by(&self, usernames: impl IntoUsernames) -> KloutResult<Vec<User>> {
        self.get_users(INFLUENCED_BY_PATH, usernames).await
    }

    /// Retrieve the users influenced by the given usernames.
    pub async fn influencer_of(&self, usernames: impl IntoUsernames) -> KloutResult<Vec<User>> {
        self.get_users(INFLUENCER_OF_PATH, usernames).await
    }

    async fn get_users(
        &self,
        path: &str,
        usernames: impl IntoUsernames,
    ) -> KloutResult<Vec<User>> {
        let usernames = usernames.into_usernames();
        Ok(self.get(path, &usernames).await?.users)
    }

    /// Build the url for a lookup.
    fn build_url(&self, path: &str, usernames: &[String]) -> KloutResult<Url> {
        let users = usernames::join(usernames);
        let url = self.config.endpoint.join(path)?;
        Ok(Url::parse_with_params(
            url.as_str(),
            &[("users", users.as_str()), ("key", self.config.key_param())],
        )?)
    }

    /// Perform a GET and decode the response.
    async fn get(&self, path: &str, usernames: &[String]) -> KloutResult<Envelope> {
        let url = self.build_url(path, usernames)?;
        debug!(path, users = usernames.len(), "sending klout request");

        let res = self.client.get(url.as_str()).send().await?;
        let status = res.status();
        if let Err(error) = response::check_status(status, res.headers()) {
            warn!(path, %status, "klout request failed");
            return Err(error);
        }

        let text = res.text().await?;
        response::parse_body(&text)
    }
}
