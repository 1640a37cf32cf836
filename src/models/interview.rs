use serde::{Deserialize, Serialize};

/// Interview record from the backend contract. No console flow reads or
/// writes interviews yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub candidate_id: i64,
    pub date: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "commentaires", default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
