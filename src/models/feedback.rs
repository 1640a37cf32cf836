use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DECISION_REJECTED: &str = "rejected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionEmailRequest {
    pub candidate_full_name: String,
    pub decision: String,
}

impl RejectionEmailRequest {
    pub fn rejected(candidate_full_name: impl Into<String>) -> Self {
        Self {
            candidate_full_name: candidate_full_name.into(),
            decision: DECISION_REJECTED.to_string(),
        }
    }
}

/// Subject and body generated server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RejectionEmailResponse {
    pub subject: String,
    pub body: String,
}
