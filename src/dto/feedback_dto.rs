use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CandidateSearchInput {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateEmailInput {
    pub candidate_id: i64,
}
