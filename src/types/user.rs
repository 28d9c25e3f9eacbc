use serde::de::DeserializeOwned;
use serde_json::{
    Map,
    Value,
};

/// A user record as returned by the api.
///
/// The shape is defined entirely by the api, so this keeps the raw json object
/// and offers typed accessors. Use [`User::parse`] to convert it into one of the
/// typed views in [`crate::types`].
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct User(pub Map<String, Value>);

impl User {
    /// Get a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a field by a dotted path, like `score.kscore`.
    ///
    /// Numeric segments index into arrays, so `influencers.0.kscore` also works.
    pub fn path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut value = self.0.get(segments.next()?)?;
        for segment in segments {
            value = match value {
                Value::Object(map) => map.get(segment)?,
                Value::Array(array) => array.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(value)
    }

    /// Get a string field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a numeric field as an f64
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// Get an integer field
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    /// Get a bool field
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Get an array field
    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key)?.as_array()
    }

    /// Get the twitter screen name, present on every record the api returns.
    pub fn twitter_screen_name(&self) -> Option<&str> {
        self.get_str("twitter_screen_name")
    }

    /// Convert this record into a typed view.
    pub fn parse<T>(&self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        T::deserialize(Value::Object(self.0.clone()))
    }

    /// Get the raw json object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the raw json object
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for User {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
