use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Candidate record as exchanged with the recruitment backend.
///
/// `id` is assigned by the backend: it is `None` only for a candidate that
/// has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    pub email: String,
    #[serde(rename = "telephone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "poste", default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(rename = "statut", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "competences", default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(rename = "date_candidature", default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
}

impl Candidate {
    pub fn new(last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            last_name: last_name.into(),
            first_name: None,
            email: email.into(),
            phone: None,
            position: None,
            status: None,
            skills: None,
            applied_at: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// "First Last", or just the last name when no first name is known.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name
        )
        .trim()
        .to_string()
    }

    pub fn display_status(&self) -> CandidateStatus {
        self.status
            .as_deref()
            .map(CandidateStatus::from_label)
            .unwrap_or_default()
    }
}

/// Display state the console derives from the free-form `statut` label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    New,
    Reviewing,
    Interview,
    Accepted,
    Rejected,
}

impl CandidateStatus {
    /// Unknown labels fall back to `New`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "reviewing" | "review" | "screening" => Self::Reviewing,
            "interview" | "interviewing" => Self::Interview,
            "accepted" | "hired" | "offer" => Self::Accepted,
            "rejected" | "declined" => Self::Rejected,
            _ => Self::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_field_names() {
        let candidate: Candidate = serde_json::from_value(json!({
            "id": 7,
            "nom": "Dupont",
            "prenom": "Jean",
            "email": "jean.dupont@email.com",
            "telephone": "0612345678",
            "poste": "Développeur Full Stack",
            "statut": "interview",
            "competences": ["Rust", "SQL"],
            "date_candidature": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(candidate.id, Some(7));
        assert_eq!(candidate.last_name, "Dupont");
        assert_eq!(candidate.first_name.as_deref(), Some("Jean"));
        assert_eq!(candidate.skills.as_ref().map(Vec::len), Some(2));
        assert_eq!(candidate.display_status(), CandidateStatus::Interview);
    }

    #[test]
    fn new_candidate_serializes_without_id() {
        let value = serde_json::to_value(Candidate::new("Dupont", "jean.dupont@email.com")).unwrap();
        assert_eq!(value, json!({ "nom": "Dupont", "email": "jean.dupont@email.com" }));
    }

    #[test]
    fn full_name_trims_missing_first_name() {
        let mut candidate = Candidate::new("Dupont", "d@example.com");
        assert_eq!(candidate.full_name(), "Dupont");
        candidate.first_name = Some("Jean".into());
        assert_eq!(candidate.full_name(), "Jean Dupont");
    }

    #[test]
    fn unknown_status_label_displays_as_new() {
        assert_eq!(CandidateStatus::from_label("  REJECTED "), CandidateStatus::Rejected);
        assert_eq!(CandidateStatus::from_label("on hold"), CandidateStatus::New);
        assert_eq!(Candidate::new("A", "a@b.c").display_status(), CandidateStatus::New);
    }
}
