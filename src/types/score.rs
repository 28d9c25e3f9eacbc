use std::collections::HashMap;

/// A Klout score for a user
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct KloutScore {
    /// The twitter screen name
    pub twitter_screen_name: String,

    /// The Klout score
    pub kscore: f64,

    /// Unknown data
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Envelope;

    const SCORE: &str = include_str!("../../test_data/klout.json");

    #[test]
    fn parse_score() {
        let envelope: Envelope = serde_json::from_str(SCORE).unwrap();
        let scores = envelope
            .users
            .iter()
            .map(|user| user.parse::<KloutScore>())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].twitter_screen_name, "damiancaruso");
        assert!(scores[0].unknown.is_empty());
    }
}
