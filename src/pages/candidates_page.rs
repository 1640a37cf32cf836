use std::future::Future;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::dto::candidate_dto::{CandidateCard, NewCandidateForm};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::pages::{failure_toast, found_toast, InFlight, Toast};
use crate::services::candidate_service::CandidateClient;
use crate::utils::validation::{require, require_id, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CandidateAction {
    LoadForProcess,
    SearchByName,
    SearchByEmail,
    SearchByPoste,
    LoadById,
    Create,
}

#[derive(Debug, Default)]
struct CandidatesState {
    candidates: Vec<Candidate>,
    last_toast: Option<Toast>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CandidatesView {
    pub candidates: Vec<Candidate>,
    pub cards: Vec<CandidateCard>,
    pub pending: Vec<CandidateAction>,
    pub last_toast: Option<Toast>,
}

/// Candidate lookup and creation. Every action replaces the single result
/// list on success and leaves it untouched on failure.
#[derive(Clone)]
pub struct CandidatesPage {
    client: CandidateClient,
    state: Arc<Mutex<CandidatesState>>,
    in_flight: Arc<InFlight<CandidateAction>>,
}

impl CandidatesPage {
    pub fn new(client: CandidateClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(CandidatesState::default())),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    pub async fn load_for_process(&self, process_id: &str) -> Toast {
        let action = CandidateAction::LoadForProcess;
        let process_id = match require_id(process_id, "Please enter a process ID") {
            Ok(id) => id,
            Err(err) => return self.reject(action, err),
        };
        self.replace_results(
            action,
            self.client.get_candidates_for_process(process_id),
            |candidates| found_toast(candidates.len()),
        )
        .await
    }

    pub async fn search_by_name(&self, name: &str) -> Toast {
        let action = CandidateAction::SearchByName;
        let name = match require(name, "Please enter a name to search") {
            Ok(name) => name,
            Err(err) => return self.reject(action, err),
        };
        self.replace_results(
            action,
            self.client.search_candidates_by_name(name),
            |candidates| found_toast(candidates.len()),
        )
        .await
    }

    pub async fn search_by_email(&self, email: &str) -> Toast {
        let action = CandidateAction::SearchByEmail;
        let email = match require(email, "Please enter an email to search") {
            Ok(email) => email,
            Err(err) => return self.reject(action, err),
        };
        self.replace_results(
            action,
            self.client.search_candidates_by_email(email),
            |candidates| found_toast(candidates.len()),
        )
        .await
    }

    pub async fn search_by_poste(&self, poste: &str) -> Toast {
        let action = CandidateAction::SearchByPoste;
        let poste = match require(poste, "Please enter a position to search") {
            Ok(poste) => poste,
            Err(err) => return self.reject(action, err),
        };
        self.replace_results(
            action,
            self.client.search_candidates_by_poste(poste),
            |candidates| found_toast(candidates.len()),
        )
        .await
    }

    pub async fn load_by_id(&self, candidate_id: &str) -> Toast {
        let action = CandidateAction::LoadById;
        let candidate_id = match require_id(candidate_id, "Please enter a candidate ID") {
            Ok(id) => id,
            Err(err) => return self.reject(action, err),
        };
        let request = async {
            let candidate = self.client.get_candidate_by_id(candidate_id).await?;
            Ok::<_, Error>(vec![candidate])
        };
        self.replace_results(action, request, |candidates| {
            let name = candidates
                .first()
                .map(|c| {
                    format!("{} {}", c.last_name, c.first_name.as_deref().unwrap_or(""))
                        .trim()
                        .to_string()
                })
                .unwrap_or_default();
            Toast::success("Success", format!("Candidate {} found", name))
        })
        .await
    }

    /// Creates a candidate. A form without last name or email is rejected
    /// before any request is made.
    pub async fn create(&self, form: NewCandidateForm) -> Toast {
        let action = CandidateAction::Create;
        let form = form.normalized();
        if let Err(err) = validate(&form) {
            return self.reject(action, err);
        }
        let candidate = form.into_candidate();
        let request = async {
            let created = self.client.create_candidate(&candidate).await?;
            Ok::<_, Error>(vec![created])
        };
        self.replace_results(action, request, |candidates| {
            let name = candidates
                .first()
                .map(|c| c.last_name.clone())
                .unwrap_or_default();
            Toast::success("Success", format!("Candidate {} created", name))
        })
        .await
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.lock().candidates.clone()
    }

    pub fn cards(&self) -> Vec<CandidateCard> {
        self.lock().candidates.iter().map(CandidateCard::from).collect()
    }

    pub fn is_pending(&self, action: CandidateAction) -> bool {
        self.in_flight.is_pending(action)
    }

    pub fn last_toast(&self) -> Option<Toast> {
        self.lock().last_toast.clone()
    }

    pub fn view(&self) -> CandidatesView {
        let state = self.lock();
        CandidatesView {
            candidates: state.candidates.clone(),
            cards: state.candidates.iter().map(CandidateCard::from).collect(),
            pending: self.in_flight.pending(),
            last_toast: state.last_toast.clone(),
        }
    }

    async fn replace_results<F, S>(&self, action: CandidateAction, request: F, success: S) -> Toast
    where
        F: Future<Output = Result<Vec<Candidate>>>,
        S: FnOnce(&[Candidate]) -> Toast,
    {
        let result = {
            let _pending = self.in_flight.begin(action);
            request.await
        };

        let toast = match result {
            Ok(candidates) => {
                info!(action = ?action, count = candidates.len(), "Candidate results updated");
                let toast = success(&candidates);
                self.lock().candidates = candidates;
                toast
            }
            Err(err) => failure_toast(action, &err),
        };
        self.remember(toast)
    }

    fn reject(&self, action: CandidateAction, err: Error) -> Toast {
        self.remember(failure_toast(action, &err))
    }

    fn remember(&self, toast: Toast) -> Toast {
        self.lock().last_toast = Some(toast.clone());
        toast
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CandidatesState> {
        self.state.lock().expect("candidates page state poisoned")
    }
}
