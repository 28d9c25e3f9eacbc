mod client;
mod config;
mod response;
pub mod types;
mod usernames;

pub use crate::{
    client::Client,
    config::ClientConfig,
    types::{
        Envelope,
        User,
    },
    usernames::IntoUsernames,
};
pub use reqwest::StatusCode;
pub use url::Url;

/// The Klout REST API endpoint
pub const ENDPOINT: &str = "http://api.klout.com";

/// Klout result type
pub type KloutResult<T> = Result<T, Error>;

/// The kind of a Klout api failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The api key was rejected.
    Forbidden,

    /// Klout had an internal error.
    InternalServerError,

    /// Klout is unavailable.
    ServiceUnavailable,

    /// The Klout gateway timed out.
    GatewayTimeout,

    /// Any other api failure.
    Generic,
}

/// Library error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The api responded with a 403
    #[error("forbidden")]
    Forbidden,

    /// The api responded with a 500
    #[error("internal server error")]
    InternalServerError,

    /// The api responded with a 503
    #[error("service unavailable")]
    ServiceUnavailable,

    /// The api responded with a 504
    #[error("gateway timeout")]
    GatewayTimeout,

    /// The api reported an error, either in the response body or through an unexpected status.
    #[error("{0}")]
    Api(String),

    /// Reqwest HTTP Error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Invalid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Get the Klout error kind.
    ///
    /// Returns `None` if this is a transport, json, or url error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Forbidden => Some(ErrorKind::Forbidden),
            Self::InternalServerError => Some(ErrorKind::InternalServerError),
            Self::ServiceUnavailable => Some(ErrorKind::ServiceUnavailable),
            Self::GatewayTimeout => Some(ErrorKind::GatewayTimeout),
            Self::Api(_) => Some(ErrorKind::Generic),
            Self::Reqwest(_) | Self::Json(_) | Self::Url(_) => None,
        }
    }

    /// Get the message the api attached to this error.
    ///
    /// Status-only errors carry no message and return an empty string.
    pub fn message(&self) -> &str {
        match self {
            Self::Api(message) => message,
            _ => "",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::Forbidden.kind(), Some(ErrorKind::Forbidden));
        assert_eq!(
            Error::GatewayTimeout.kind(),
            Some(ErrorKind::GatewayTimeout)
        );
        assert_eq!(
            Error::Api("No users".into()).kind(),
            Some(ErrorKind::Generic)
        );

        let json_error = serde_json::from_str::<serde_json::Value>("<h1>").unwrap_err();
        assert_eq!(Error::Json(json_error).kind(), None);
    }

    #[test]
    fn messages() {
        assert_eq!(Error::Forbidden.message(), "");
        assert_eq!(Error::ServiceUnavailable.message(), "");
        assert_eq!(Error::Api("502 - 1.1".into()).message(), "502 - 1.1");
        assert_eq!(Error::Api("No users".into()).to_string(), "No users");
    }
}
