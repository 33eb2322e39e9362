use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const USER_ID_KEY: &str = "userId";

/// An activity event reported for a single user.
///
/// Extra metadata is flattened next to `userId` in the JSON body. The typed
/// `user_id` is the only source of `userId`; metadata can never shadow it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPayload {
    pub user_id: String,
    #[serde(flatten)]
    properties: Map<String, Value>,
}

impl ActivityPayload {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            properties: Map::new(),
        }
    }

    /// Adds a metadata property. A `userId` key is ignored.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != USER_ID_KEY {
            self.properties.insert(key, value.into());
        }
        self
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
