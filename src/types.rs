pub mod influence;
pub mod profile;
pub mod score;
pub mod topics;
pub mod user;

pub use self::{
    influence::{
        UserInfluencees,
        UserInfluencers,
    },
    profile::{
        ScoreDetails,
        UserProfile,
    },
    score::KloutScore,
    topics::UserTopics,
    user::User,
};
use std::collections::HashMap;

/// A decoded api response
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Envelope {
    /// The returned users
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// Treat a `null` user list like a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<User>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let users: Option<Vec<User>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(users.unwrap_or_default())
}
