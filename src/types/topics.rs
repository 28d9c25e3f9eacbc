use std::collections::HashMap;

/// The topics a user is influential about
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserTopics {
    /// The twitter screen name
    pub twitter_screen_name: String,

    /// The topics
    #[serde(default)]
    pub topics: Vec<String>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}
