pub mod candidate_routes;
pub mod extract;
pub mod health;
pub mod process_routes;
pub mod recruiter_routes;
pub mod rejection_email_routes;

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::dto::candidate_dto::{
    CandidateCard, CandidateIdInput, EmailSearchInput, NameSearchInput, NewCandidateForm,
    PosteSearchInput, ProcessIdInput,
};
use crate::dto::feedback_dto::{CandidateSearchInput, GenerateEmailInput};
use crate::dto::page_dto::{
    CandidatesActionResponse, ProcessesActionResponse, RecruitersActionResponse,
    RejectionEmailActionResponse,
};
use crate::dto::process_dto::NewProcessForm;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::feedback::RejectionEmailResponse;
use crate::models::process::{Process, ProcessCreate};
use crate::pages::candidates_page::{CandidateAction, CandidatesView};
use crate::pages::processes_page::{ProcessAction, ProcessesView};
use crate::pages::recruiters_page::{RecruiterAction, RecruitersView};
use crate::pages::rejection_email_page::{RejectionEmailAction, RejectionEmailView};
use crate::pages::{Toast, ToastVariant};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        candidate_routes::get_candidates_page,
        candidate_routes::load_for_process,
        candidate_routes::search_by_name,
        candidate_routes::search_by_email,
        candidate_routes::search_by_poste,
        candidate_routes::load_by_id,
        candidate_routes::create_candidate,
        process_routes::get_processes_page,
        process_routes::load_processes,
        process_routes::create_process,
        recruiter_routes::get_recruiters_page,
        recruiter_routes::create_recruiter,
        rejection_email_routes::get_rejection_email_page,
        rejection_email_routes::search_candidates,
        rejection_email_routes::generate_email,
        rejection_email_routes::copy_email,
    ),
    components(schemas(
        Candidate,
        CandidateStatus,
        CandidateCard,
        Process,
        ProcessCreate,
        RejectionEmailResponse,
        Toast,
        ToastVariant,
        ProcessIdInput,
        CandidateIdInput,
        NameSearchInput,
        EmailSearchInput,
        PosteSearchInput,
        NewCandidateForm,
        NewProcessForm,
        CandidateSearchInput,
        GenerateEmailInput,
        CandidateAction,
        ProcessAction,
        RecruiterAction,
        RejectionEmailAction,
        CandidatesView,
        ProcessesView,
        RecruitersView,
        RejectionEmailView,
        CandidatesActionResponse,
        ProcessesActionResponse,
        RecruitersActionResponse,
        RejectionEmailActionResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Every console route, without the outer HTTP layers added in `main`.
pub fn router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let candidates_page = Router::new()
        .route(
            "/api/pages/candidates",
            get(candidate_routes::get_candidates_page).post(candidate_routes::create_candidate),
        )
        .route(
            "/api/pages/candidates/by-process",
            post(candidate_routes::load_for_process),
        )
        .route(
            "/api/pages/candidates/search",
            post(candidate_routes::search_by_name),
        )
        .route(
            "/api/pages/candidates/search-email",
            post(candidate_routes::search_by_email),
        )
        .route(
            "/api/pages/candidates/search-poste",
            post(candidate_routes::search_by_poste),
        )
        .route(
            "/api/pages/candidates/by-id",
            post(candidate_routes::load_by_id),
        );

    let processes_page = Router::new()
        .route(
            "/api/pages/processes",
            get(process_routes::get_processes_page).post(process_routes::create_process),
        )
        .route(
            "/api/pages/processes/load",
            post(process_routes::load_processes),
        );

    let recruiters_page = Router::new().route(
        "/api/pages/recruiters",
        get(recruiter_routes::get_recruiters_page).post(recruiter_routes::create_recruiter),
    );

    let rejection_email_page = Router::new()
        .route(
            "/api/pages/rejection-email",
            get(rejection_email_routes::get_rejection_email_page),
        )
        .route(
            "/api/pages/rejection-email/search",
            post(rejection_email_routes::search_candidates),
        )
        .route(
            "/api/pages/rejection-email/generate",
            post(rejection_email_routes::generate_email),
        )
        .route(
            "/api/pages/rejection-email/copy",
            post(rejection_email_routes::copy_email),
        );

    base_routes
        .merge(candidates_page)
        .merge(processes_page)
        .merge(recruiters_page)
        .merge(rejection_email_page)
        .with_state(state)
}
