use std::collections::HashMap;

/// A user's Klout profile
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserProfile {
    /// The twitter id
    pub twitter_id: String,

    /// The twitter screen name
    pub twitter_screen_name: String,

    /// Score details
    pub score: ScoreDetails,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// The detailed breakdown of a Klout score
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScoreDetails {
    /// The Klout score
    pub kscore: f64,

    /// The score trend
    pub slope: f64,

    /// A description of the user
    pub description: String,

    /// The Klout class id
    pub kclass_id: u32,

    /// The Klout class name
    pub kclass: String,

    /// A description of the Klout class
    pub kclass_description: String,

    /// A description of the score
    pub kscore_description: String,

    /// Network influence
    pub network_score: f64,

    /// Amplification probability
    pub amplification_score: f64,

    /// The number of people the user influences
    pub true_reach: u64,

    /// Score change over the last day
    pub delta_1day: f64,

    /// Score change over the last 5 days
    pub delta_5day: f64,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Envelope;

    const PROFILE: &str = include_str!("../../test_data/users_show.json");

    #[test]
    fn parse_profile() {
        let envelope: Envelope = serde_json::from_str(PROFILE).unwrap();
        let profile: UserProfile = envelope.users[0].parse().unwrap();
        assert_eq!(profile.twitter_id, "17369322");
        assert_eq!(profile.score.kclass_id, 5);
        assert_eq!(profile.score.kclass, "Specialist");
        assert!(profile.score.unknown.is_empty());
    }
}
