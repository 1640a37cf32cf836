use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::info;
use utoipa::ToSchema;

use crate::error::Error;
use crate::models::recruiter::Recruiter;
use crate::pages::{failure_toast, InFlight, Toast};
use crate::services::recruiter_service::RecruiterClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecruiterAction {
    Create,
}

#[derive(Debug, Default)]
struct RecruitersState {
    last_created: Option<Recruiter>,
    last_toast: Option<Toast>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecruitersView {
    #[schema(value_type = Option<Object>)]
    pub last_created: Option<Recruiter>,
    pub pending: Vec<RecruiterAction>,
    pub last_toast: Option<Toast>,
}

#[derive(Clone)]
pub struct RecruitersPage {
    client: RecruiterClient,
    state: Arc<Mutex<RecruitersState>>,
    in_flight: Arc<InFlight<RecruiterAction>>,
}

impl RecruitersPage {
    pub fn new(client: RecruiterClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(RecruitersState::default())),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Forwards `details` to the backend. Only a non-empty JSON object is
    /// accepted; its fields are not inspected.
    pub async fn create(&self, details: JsonValue) -> Toast {
        let action = RecruiterAction::Create;
        let recruiter = match Recruiter::try_from(details) {
            Ok(recruiter) if !recruiter.is_empty() => recruiter,
            Ok(_) => {
                return self.reject(
                    action,
                    Error::BadRequest("Recruiter details are required".to_string()),
                )
            }
            Err(_) => {
                return self.reject(
                    action,
                    Error::BadRequest("Recruiter details must be a JSON object".to_string()),
                )
            }
        };

        let result = {
            let _pending = self.in_flight.begin(action);
            self.client.create_recruiter(&recruiter).await
        };

        let toast = match result {
            Ok(created) => {
                info!("Recruiter created");
                self.lock().last_created = Some(created);
                Toast::success("Success", "Recruiter created")
            }
            Err(err) => failure_toast(action, &err),
        };
        self.remember(toast)
    }

    pub fn last_created(&self) -> Option<Recruiter> {
        self.lock().last_created.clone()
    }

    pub fn view(&self) -> RecruitersView {
        let state = self.lock();
        RecruitersView {
            last_created: state.last_created.clone(),
            pending: self.in_flight.pending(),
            last_toast: state.last_toast.clone(),
        }
    }

    fn reject(&self, action: RecruiterAction, err: Error) -> Toast {
        self.remember(failure_toast(action, &err))
    }

    fn remember(&self, toast: Toast) -> Toast {
        self.lock().last_toast = Some(toast.clone());
        toast
    }

    fn lock(&self) -> MutexGuard<'_, RecruitersState> {
        self.state.lock().expect("recruiters page state poisoned")
    }
}
