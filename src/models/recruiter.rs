use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Recruiter record. The console never reads its fields; it forwards the
/// object to the backend as-is and keeps whatever comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recruiter(pub Map<String, JsonValue>);

impl Recruiter {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.0)
    }
}

impl TryFrom<JsonValue> for Recruiter {
    type Error = JsonValue;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
