pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::pages::{
    candidates_page::CandidatesPage, processes_page::ProcessesPage,
    recruiters_page::RecruitersPage, rejection_email_page::RejectionEmailPage,
};
use crate::services::{
    api_client::ApiClient,
    candidate_service::{tunnel_headers, CandidateClient},
    feedback_service::FeedbackClient,
    process_service::ProcessClient,
    recruiter_service::RecruiterClient,
};
use crate::utils::clipboard::{Clipboard, ClipboardBuffer};
use reqwest::Client;

/// Clients and page controllers, built once at start-up and shared by every
/// route.
#[derive(Clone)]
pub struct AppState {
    pub candidate_client: CandidateClient,
    pub process_client: ProcessClient,
    pub recruiter_client: RecruiterClient,
    pub feedback_client: FeedbackClient,
    pub candidates_page: CandidatesPage,
    pub processes_page: ProcessesPage,
    pub recruiters_page: RecruitersPage,
    pub rejection_email_page: RejectionEmailPage,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_clipboard(config, Arc::new(ClipboardBuffer::new()))
    }

    pub fn with_clipboard(config: &Config, clipboard: Arc<dyn Clipboard>) -> Result<Self> {
        let http_client = Client::builder().build()?;
        let api = ApiClient::new(http_client, &config.api_base_url)?;

        let candidate_api = if config.tunnel_headers {
            api.clone()
                .with_headers(tunnel_headers(&config.tunnel_user_agent)?)
        } else {
            api.clone()
        };

        let candidate_client = CandidateClient::new(candidate_api);
        let process_client = ProcessClient::new(api.clone(), config.process_contract);
        let recruiter_client = RecruiterClient::new(api.clone());
        let feedback_client = FeedbackClient::new(api, &config.feedback_path);

        let candidates_page = CandidatesPage::new(candidate_client.clone());
        let processes_page = ProcessesPage::new(process_client.clone());
        let recruiters_page = RecruitersPage::new(recruiter_client.clone());
        let rejection_email_page = RejectionEmailPage::new(
            candidate_client.clone(),
            feedback_client.clone(),
            clipboard,
        );

        Ok(Self {
            candidate_client,
            process_client,
            recruiter_client,
            feedback_client,
            candidates_page,
            processes_page,
            recruiters_page,
            rejection_email_page,
        })
    }
}
