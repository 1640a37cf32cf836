use tracing::instrument;

use crate::error::Result;
use crate::models::recruiter::Recruiter;
use crate::services::api_client::{ensure_success, ApiClient};

#[derive(Clone, Debug)]
pub struct RecruiterClient {
    api: ApiClient,
}

impl RecruiterClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self, recruiter))]
    pub async fn create_recruiter(&self, recruiter: &Recruiter) -> Result<Recruiter> {
        let url = self.api.endpoint(["recruiters"])?;
        let response = self.api.post_json(url, recruiter).await?;
        let response = ensure_success(response, "Failed to create recruiter")?;
        Ok(response.json().await?)
    }
}
