use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::process::ProcessCreate;
use crate::utils::validation::non_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProcessForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Process name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub candidate_ids: Vec<i64>,
}

impl NewProcessForm {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: non_blank(self.description),
            candidate_ids: self.candidate_ids,
        }
    }

    pub fn into_create(self) -> ProcessCreate {
        let form = self.normalized();
        ProcessCreate {
            name: form.name,
            description: form.description,
            candidate_ids: (!form.candidate_ids.is_empty()).then_some(form.candidate_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_list_is_omitted() {
        let create = NewProcessForm {
            name: " Backend Developer ".into(),
            description: Some(" ".into()),
            candidate_ids: vec![],
        }
        .into_create();

        assert_eq!(create.name, "Backend Developer");
        assert_eq!(create.description, None);
        assert_eq!(create.candidate_ids, None);
    }
}
