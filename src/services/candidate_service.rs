use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::services::api_client::{ensure_success, ApiClient};

pub const NGROK_SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";

/// Static headers some deployments need in front of a tunnel service.
pub fn tunnel_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(NGROK_SKIP_BROWSER_WARNING),
        HeaderValue::from_static("true"),
    );
    let user_agent = HeaderValue::from_str(user_agent)
        .map_err(|e| Error::Config(format!("Invalid TUNNEL_USER_AGENT: {}", e)))?;
    headers.insert(USER_AGENT, user_agent);
    Ok(headers)
}

/// Client for the `/candidates` resource family.
///
/// Searches treat a 404 as "no matches"; the by-id lookup treats it as
/// [`Error::NotFound`]. Nothing is retried or cached.
#[derive(Clone, Debug)]
pub struct CandidateClient {
    api: ApiClient,
}

impl CandidateClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn get_candidates_for_process(&self, process_id: i64) -> Result<Vec<Candidate>> {
        let process_id = process_id.to_string();
        let url = self
            .api
            .endpoint(["processes", process_id.as_str(), "candidates"])?;
        let response = self.api.get(url).await?;
        let response = ensure_success(response, "Failed to fetch candidates")?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn search_candidates_by_name(&self, name: &str) -> Result<Vec<Candidate>> {
        self.search(["candidates", "search", name]).await
    }

    #[instrument(skip(self))]
    pub async fn search_candidates_by_email(&self, email: &str) -> Result<Vec<Candidate>> {
        self.search(["candidates", "search", "email", email]).await
    }

    #[instrument(skip(self))]
    pub async fn search_candidates_by_poste(&self, poste: &str) -> Result<Vec<Candidate>> {
        self.search(["candidates", "search", "poste", poste]).await
    }

    #[instrument(skip(self))]
    pub async fn get_candidate_by_id(&self, candidate_id: i64) -> Result<Candidate> {
        let candidate_id = candidate_id.to_string();
        let url = self.api.endpoint(["candidates", candidate_id.as_str()])?;
        let response = self.api.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound("Candidate not found".to_string()));
        }
        let response = ensure_success(response, "Failed to fetch candidate")?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    pub async fn create_candidate(&self, candidate: &Candidate) -> Result<Candidate> {
        let url = self.api.endpoint(["candidates"])?;
        let response = self.api.post_json(url, candidate).await?;
        let response = ensure_success(response, "Failed to create candidate")?;
        let created: Candidate = response.json().await?;
        if !created.is_persisted() {
            return Err(Error::InvalidResponse(
                "created candidate has no id".to_string(),
            ));
        }
        Ok(created)
    }

    async fn search<I>(&self, segments: I) -> Result<Vec<Candidate>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let url = self.api.endpoint(segments)?;
        let response = self.api.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Search returned 404, treating as no matches");
            return Ok(Vec::new());
        }
        let response = ensure_success(response, "Search failed")?;
        Ok(response.json().await?)
    }
}
