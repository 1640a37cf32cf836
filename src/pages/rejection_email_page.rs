use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::error::Error;
use crate::models::candidate::Candidate;
use crate::models::feedback::{RejectionEmailRequest, RejectionEmailResponse};
use crate::pages::{failure_toast, found_toast, InFlight, Toast};
use crate::services::candidate_service::CandidateClient;
use crate::services::feedback_service::FeedbackClient;
use crate::utils::clipboard::Clipboard;
use crate::utils::validation::require;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectionEmailAction {
    Search,
    Generate,
}

#[derive(Debug, Default)]
struct RejectionEmailState {
    candidates: Vec<Candidate>,
    generated: Option<RejectionEmailResponse>,
    generating_for: Option<i64>,
    copied: Option<String>,
    last_toast: Option<Toast>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RejectionEmailView {
    pub candidates: Vec<Candidate>,
    pub generated: Option<RejectionEmailResponse>,
    pub generating_for: Option<i64>,
    /// Text handed to the clipboard by the last successful copy. The browser
    /// writes it to the operator's own clipboard.
    pub copied: Option<String>,
    pub pending: Vec<RejectionEmailAction>,
    pub last_toast: Option<Toast>,
}

/// Search a candidate by name, generate a rejection email for one of the
/// results, then copy its body.
#[derive(Clone)]
pub struct RejectionEmailPage {
    candidates: CandidateClient,
    feedback: FeedbackClient,
    clipboard: Arc<dyn Clipboard>,
    state: Arc<Mutex<RejectionEmailState>>,
    in_flight: Arc<InFlight<RejectionEmailAction>>,
}

impl RejectionEmailPage {
    pub fn new(
        candidates: CandidateClient,
        feedback: FeedbackClient,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            candidates,
            feedback,
            clipboard,
            state: Arc::new(Mutex::new(RejectionEmailState::default())),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// A failed search keeps the previous results on screen.
    pub async fn search(&self, term: &str) -> Toast {
        let action = RejectionEmailAction::Search;
        let term = match require(term, "Please enter a candidate name") {
            Ok(term) => term,
            Err(err) => return self.reject(action, err),
        };

        {
            let mut state = self.lock();
            state.generated = None;
            state.copied = None;
        }
        let result = {
            let _pending = self.in_flight.begin(action);
            self.candidates.search_candidates_by_name(term).await
        };

        let toast = match result {
            Ok(candidates) => {
                let toast = found_toast(candidates.len());
                self.lock().candidates = candidates;
                toast
            }
            Err(err) => failure_toast(action, &err),
        };
        self.remember(toast)
    }

    /// Generates the email for a candidate from the current search results.
    pub async fn generate(&self, candidate_id: i64) -> Toast {
        let action = RejectionEmailAction::Generate;
        let candidate = {
            let state = self.lock();
            state
                .candidates
                .iter()
                .find(|c| c.id == Some(candidate_id))
                .cloned()
        };
        let Some(candidate) = candidate else {
            return self.reject(
                action,
                Error::BadRequest("Select a candidate from the search results".to_string()),
            );
        };

        {
            let mut state = self.lock();
            state.generating_for = Some(candidate_id);
            state.generated = None;
            state.copied = None;
        }

        let request = RejectionEmailRequest::rejected(candidate.full_name());
        let result = {
            let _pending = self.in_flight.begin(action);
            self.feedback.generate_rejection_email(&request).await
        };

        let toast = {
            let mut state = self.lock();
            if state.generating_for == Some(candidate_id) {
                state.generating_for = None;
            }
            match result {
                Ok(email) => {
                    info!(candidate_id, "Rejection email ready");
                    state.generated = Some(email);
                    Toast::success(
                        "Email generated",
                        "The rejection email template was generated",
                    )
                }
                Err(err) => failure_toast(action, &err),
            }
        };
        self.remember(toast)
    }

    /// Copies the generated body, unmodified, to the clipboard.
    pub fn copy(&self) -> Toast {
        let body = self.lock().generated.as_ref().map(|email| email.body.clone());
        let Some(body) = body else {
            return self.remember(Toast::error("Generate an email before copying it"));
        };

        let toast = match self.clipboard.write_text(&body) {
            Ok(()) => {
                self.lock().copied = Some(body);
                Toast::success("Copied", "The email body was copied to the clipboard")
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                Toast::error("Unable to copy to the clipboard")
            }
        };
        self.remember(toast)
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.lock().candidates.clone()
    }

    pub fn generated(&self) -> Option<RejectionEmailResponse> {
        self.lock().generated.clone()
    }

    pub fn generating_for(&self) -> Option<i64> {
        self.lock().generating_for
    }

    pub fn copied(&self) -> Option<String> {
        self.lock().copied.clone()
    }

    pub fn view(&self) -> RejectionEmailView {
        let state = self.lock();
        RejectionEmailView {
            candidates: state.candidates.clone(),
            generated: state.generated.clone(),
            generating_for: state.generating_for,
            copied: state.copied.clone(),
            pending: self.in_flight.pending(),
            last_toast: state.last_toast.clone(),
        }
    }

    fn reject(&self, action: RejectionEmailAction, err: Error) -> Toast {
        self.remember(failure_toast(action, &err))
    }

    fn remember(&self, toast: Toast) -> Toast {
        self.lock().last_toast = Some(toast.clone());
        toast
    }

    fn lock(&self) -> MutexGuard<'_, RejectionEmailState> {
        self.state.lock().expect("rejection email page state poisoned")
    }
}
