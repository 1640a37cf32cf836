use tracing::instrument;

use crate::error::Result;
use crate::models::process::{
    LegacyProcess, LegacyProcessCreate, Process, ProcessContract, ProcessCreate,
};
use crate::services::api_client::{ensure_success, ApiClient};

/// Client for the `/processes` resource, bound to one field-naming contract.
#[derive(Clone, Debug)]
pub struct ProcessClient {
    api: ApiClient,
    contract: ProcessContract,
}

impl ProcessClient {
    pub fn new(api: ApiClient, contract: ProcessContract) -> Self {
        Self { api, contract }
    }

    pub fn contract(&self) -> ProcessContract {
        self.contract
    }

    #[instrument(skip(self), fields(contract = ?self.contract))]
    pub async fn get_all_processes(&self) -> Result<Vec<Process>> {
        let url = self.api.endpoint(["processes"])?;
        let response = self.api.get(url).await?;
        let response = ensure_success(response, "Failed to fetch processes")?;

        let processes = match self.contract {
            ProcessContract::Current => response.json::<Vec<Process>>().await?,
            ProcessContract::Legacy => response
                .json::<Vec<LegacyProcess>>()
                .await?
                .into_iter()
                .map(Process::from)
                .collect(),
        };
        Ok(processes)
    }

    #[instrument(skip(self, data), fields(contract = ?self.contract, name = %data.name))]
    pub async fn create_process(&self, data: &ProcessCreate) -> Result<Process> {
        let url = self.api.endpoint(["processes"])?;
        let response = match self.contract {
            ProcessContract::Current => self.api.post_json(url, data).await?,
            ProcessContract::Legacy => {
                self.api
                    .post_json(url, &LegacyProcessCreate::from(data))
                    .await?
            }
        };
        let response = ensure_success(response, "Failed to create process")?;

        let process = match self.contract {
            ProcessContract::Current => response.json::<Process>().await?,
            ProcessContract::Legacy => response.json::<LegacyProcess>().await?.into(),
        };
        Ok(process)
    }
}
