use super::KloutScore;
use std::collections::HashMap;

/// A user and the users that influence them
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserInfluencers {
    /// The twitter screen name
    pub twitter_screen_name: String,

    /// The users influencing this user
    #[serde(default)]
    pub influencers: Vec<KloutScore>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A user and the users they influence
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserInfluencees {
    /// The twitter screen name
    pub twitter_screen_name: String,

    /// The users influenced by this user
    #[serde(default)]
    pub influencees: Vec<KloutScore>,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Envelope;

    const INFLUENCED_BY: &str = include_str!("../../test_data/soi_influenced_by.json");
    const INFLUENCER_OF: &str = include_str!("../../test_data/soi_influencer_of.json");

    #[test]
    fn parse_influencers() {
        let envelope: Envelope = serde_json::from_str(INFLUENCED_BY).unwrap();
        let user: UserInfluencers = envelope.users[0].parse().unwrap();
        assert_eq!(user.twitter_screen_name, "damiancaruso");
        assert_eq!(user.influencers.len(), 3);
        assert_eq!(user.influencers[0].twitter_screen_name, "dhh");
    }

    #[test]
    fn parse_influencees() {
        let envelope: Envelope = serde_json::from_str(INFLUENCER_OF).unwrap();
        let user: UserInfluencees = envelope.users[0].parse().unwrap();
        assert_eq!(user.influencees.len(), 2);
        assert!(user.influencees.iter().all(|user| user.kscore > 0.0));
    }

    #[test]
    fn wrong_view_fails() {
        let envelope: Envelope = serde_json::from_str(INFLUENCED_BY).unwrap();
        assert!(envelope.users[0].parse::<crate::types::UserProfile>().is_err());
    }
}
