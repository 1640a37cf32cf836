use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::dto::process_dto::NewProcessForm;
use crate::error::Error;
use crate::models::process::Process;
use crate::pages::{failure_toast, InFlight, Toast};
use crate::services::process_service::ProcessClient;
use crate::utils::validation::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProcessAction {
    LoadAll,
    Create,
}

#[derive(Debug, Default)]
struct ProcessesState {
    processes: Vec<Process>,
    last_created: Option<Process>,
    last_toast: Option<Toast>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProcessesView {
    pub processes: Vec<Process>,
    pub last_created: Option<Process>,
    pub pending: Vec<ProcessAction>,
    pub last_toast: Option<Toast>,
}

/// Job postings: the browsable list plus a creation form.
#[derive(Clone)]
pub struct ProcessesPage {
    client: ProcessClient,
    state: Arc<Mutex<ProcessesState>>,
    in_flight: Arc<InFlight<ProcessAction>>,
}

impl ProcessesPage {
    pub fn new(client: ProcessClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(ProcessesState::default())),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    pub async fn load_all(&self) -> Toast {
        let action = ProcessAction::LoadAll;
        let result = {
            let _pending = self.in_flight.begin(action);
            self.client.get_all_processes().await
        };

        let toast = match result {
            Ok(processes) => {
                info!(count = processes.len(), "Process list refreshed");
                let toast =
                    Toast::success("Success", format!("{} process(es) loaded", processes.len()));
                self.lock().processes = processes;
                toast
            }
            Err(err) => failure_toast(action, &err),
        };
        self.remember(toast)
    }

    /// Creates a process and appends it to the loaded list.
    pub async fn create(&self, form: NewProcessForm) -> Toast {
        let action = ProcessAction::Create;
        let form = form.normalized();
        if let Err(err) = validate(&form) {
            return self.reject(action, err);
        }

        let create = form.into_create();
        let result = {
            let _pending = self.in_flight.begin(action);
            self.client.create_process(&create).await
        };

        let toast = match result {
            Ok(process) => {
                info!(id = process.id, "Process created");
                let toast = Toast::success("Success", format!("Process {} created", process.name));
                let mut state = self.lock();
                state.processes.push(process.clone());
                state.last_created = Some(process);
                toast
            }
            Err(err) => failure_toast(action, &err),
        };
        self.remember(toast)
    }

    pub fn processes(&self) -> Vec<Process> {
        self.lock().processes.clone()
    }

    pub fn last_created(&self) -> Option<Process> {
        self.lock().last_created.clone()
    }

    pub fn is_pending(&self, action: ProcessAction) -> bool {
        self.in_flight.is_pending(action)
    }

    pub fn view(&self) -> ProcessesView {
        let state = self.lock();
        ProcessesView {
            processes: state.processes.clone(),
            last_created: state.last_created.clone(),
            pending: self.in_flight.pending(),
            last_toast: state.last_toast.clone(),
        }
    }

    fn reject(&self, action: ProcessAction, err: Error) -> Toast {
        self.remember(failure_toast(action, &err))
    }

    fn remember(&self, toast: Toast) -> Toast {
        self.lock().last_toast = Some(toast.clone());
        toast
    }

    fn lock(&self) -> MutexGuard<'_, ProcessesState> {
        self.state.lock().expect("processes page state poisoned")
    }
}
