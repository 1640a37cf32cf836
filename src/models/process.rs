use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::candidate::Candidate;

/// Which field naming the backend uses for processes.
///
/// The backend has shipped two incompatible shapes. `Current` is the
/// canonical one (`name_process` / `job_description`); `Legacy` is the older
/// `titre` / `description` shape, decoded separately and converted with
/// [`From<LegacyProcess>`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessContract {
    #[default]
    Current,
    Legacy,
}

impl std::str::FromStr for ProcessContract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "name_process" => Ok(Self::Current),
            "legacy" | "titre" => Ok(Self::Legacy),
            other => Err(format!("expected `current` or `legacy`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Process {
    pub id: i64,
    #[serde(rename = "name_process")]
    pub name: String,
    #[serde(rename = "job_description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyProcess {
    pub id: i64,
    pub titre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

impl From<LegacyProcess> for Process {
    fn from(legacy: LegacyProcess) -> Self {
        Self {
            id: legacy.id,
            name: legacy.titre,
            description: legacy.description,
            status: legacy.status,
            candidates: legacy.candidates,
        }
    }
}

/// Write model for `POST /processes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessCreate {
    #[serde(rename = "name_process")]
    pub name: String,
    #[serde(rename = "job_description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyProcessCreate {
    pub titre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_ids: Option<Vec<i64>>,
}

impl From<&ProcessCreate> for LegacyProcessCreate {
    fn from(create: &ProcessCreate) -> Self {
        Self {
            titre: create.name.clone(),
            description: create.description.clone(),
            candidate_ids: create.candidate_ids.clone(),
        }
    }
}
