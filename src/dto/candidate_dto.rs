use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::utils::{time, validation::non_blank};

pub const UNSPECIFIED_POSITION: &str = "Unspecified";

/// Form fields arrive as text, but JSON clients may send plain numbers.
pub fn deserialize_id_flexible<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdOrText {
        Int(i64),
        Text(String),
    }

    match IdOrText::deserialize(deserializer)? {
        IdOrText::Int(i) => Ok(i.to_string()),
        IdOrText::Text(s) => Ok(s),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewCandidateForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub nom: String,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub poste: Option<String>,
}

impl NewCandidateForm {
    /// Trims every field so that whitespace-only input counts as missing.
    pub fn normalized(self) -> Self {
        Self {
            nom: self.nom.trim().to_string(),
            prenom: non_blank(self.prenom),
            email: self.email.trim().to_string(),
            telephone: non_blank(self.telephone),
            poste: non_blank(self.poste),
        }
    }

    pub fn into_candidate(self) -> Candidate {
        let form = self.normalized();
        Candidate {
            first_name: form.prenom,
            phone: form.telephone,
            position: form.poste,
            ..Candidate::new(form.nom, form.email)
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProcessIdInput {
    #[serde(default, deserialize_with = "deserialize_id_flexible")]
    pub process_id: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CandidateIdInput {
    #[serde(default, deserialize_with = "deserialize_id_flexible")]
    pub candidate_id: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NameSearchInput {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmailSearchInput {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PosteSearchInput {
    #[serde(default)]
    pub poste: String,
}

/// Display projection of a candidate for card-style rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CandidateCard {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: CandidateStatus,
    pub skills: Vec<String>,
    pub applied_date: String,
    pub position: String,
}

impl From<&Candidate> for CandidateCard {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.unwrap_or(0),
            first_name: candidate.first_name.clone().unwrap_or_default(),
            last_name: candidate.last_name.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            status: candidate.display_status(),
            skills: candidate.skills.clone().unwrap_or_default(),
            applied_date: candidate
                .applied_at
                .clone()
                .unwrap_or_else(time::now_rfc3339),
            position: candidate
                .position
                .clone()
                .unwrap_or_else(|| UNSPECIFIED_POSITION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn blank_required_fields_fail_validation() {
        let form = NewCandidateForm {
            nom: "   ".into(),
            email: "jean.dupont@email.com".into(),
            ..Default::default()
        }
        .normalized();
        assert!(form.validate().is_err());
    }

    #[test]
    fn form_becomes_candidate_without_id() {
        let candidate = NewCandidateForm {
            nom: " Dupont ".into(),
            prenom: Some("Jean".into()),
            email: "jean.dupont@email.com".into(),
            telephone: Some("".into()),
            poste: None,
        }
        .into_candidate();

        assert_eq!(candidate.id, None);
        assert_eq!(candidate.last_name, "Dupont");
        assert_eq!(candidate.first_name.as_deref(), Some("Jean"));
        assert_eq!(candidate.phone, None);
    }

    #[test]
    fn ids_accept_numbers_or_text() {
        let a: ProcessIdInput = serde_json::from_value(json!({ "process_id": 12 })).unwrap();
        let b: ProcessIdInput = serde_json::from_value(json!({ "process_id": "12" })).unwrap();
        let c: ProcessIdInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(a.process_id, "12");
        assert_eq!(b.process_id, "12");
        assert_eq!(c.process_id, "");
    }

    #[test]
    fn card_fills_display_defaults() {
        let candidate = Candidate::new("Martin", "martin@example.com");
        let card = CandidateCard::from(&candidate);

        assert_eq!(card.id, 0);
        assert_eq!(card.first_name, "");
        assert_eq!(card.status, CandidateStatus::New);
        assert!(card.skills.is_empty());
        assert_eq!(card.position, UNSPECIFIED_POSITION);
        assert!(chrono::DateTime::parse_from_rfc3339(&card.applied_date).is_ok());
    }

    #[test]
    fn card_keeps_backend_values() {
        let mut candidate = Candidate::new("Martin", "martin@example.com");
        candidate.id = Some(9);
        candidate.status = Some("rejected".into());
        candidate.applied_at = Some("2024-01-15T09:30:00Z".into());
        candidate.position = Some("Data Analyst".into());

        let card = CandidateCard::from(&candidate);
        assert_eq!(card.id, 9);
        assert_eq!(card.status, CandidateStatus::Rejected);
        assert_eq!(card.applied_date, "2024-01-15T09:30:00Z");
        assert_eq!(card.position, "Data Analyst");
    }
}
