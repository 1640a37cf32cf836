use tracing::{info, instrument};

use crate::error::Result;
use crate::models::feedback::{RejectionEmailRequest, RejectionEmailResponse};
use crate::services::api_client::{ensure_success, ApiClient};

/// Asks the backend to write a rejection email. All templating happens
/// server-side.
#[derive(Clone, Debug)]
pub struct FeedbackClient {
    api: ApiClient,
    path: Vec<String>,
}

impl FeedbackClient {
    pub fn new(api: ApiClient, path: &str) -> Self {
        let path = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self { api, path }
    }

    #[instrument(skip(self, request), fields(candidate = %request.candidate_full_name, decision = %request.decision))]
    pub async fn generate_rejection_email(
        &self,
        request: &RejectionEmailRequest,
    ) -> Result<RejectionEmailResponse> {
        let url = self.api.endpoint(&self.path)?;
        let response = self.api.post_json(url, request).await?;
        let response = ensure_success(response, "Failed to generate rejection email")?;
        let email: RejectionEmailResponse = response.json().await?;
        info!(subject = %email.subject, "Rejection email generated");
        Ok(email)
    }
}
