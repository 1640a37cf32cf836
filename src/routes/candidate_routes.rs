use axum::{extract::State, response::Json};

use crate::{
    dto::candidate_dto::{
        CandidateIdInput, EmailSearchInput, NameSearchInput, NewCandidateForm, PosteSearchInput,
        ProcessIdInput,
    },
    dto::page_dto::{ActionResponse, CandidatesActionResponse},
    pages::candidates_page::CandidatesView,
    routes::extract::AppJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/candidates",
    responses(
        (status = 200, description = "Current candidates page", body = CandidatesView)
    )
)]
#[axum::debug_handler]
pub async fn get_candidates_page(State(state): State<AppState>) -> Json<CandidatesView> {
    Json(state.candidates_page.view())
}

#[utoipa::path(
    post,
    path = "/api/pages/candidates/by-process",
    request_body = ProcessIdInput,
    responses(
        (status = 200, description = "Candidates of a process, or an error toast", body = CandidatesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn load_for_process(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProcessIdInput>,
) -> Json<CandidatesActionResponse> {
    let page = &state.candidates_page;
    let toast = page.load_for_process(&payload.process_id).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/candidates/search",
    request_body = NameSearchInput,
    responses(
        (status = 200, description = "Name search result, or an error toast", body = CandidatesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn search_by_name(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NameSearchInput>,
) -> Json<CandidatesActionResponse> {
    let page = &state.candidates_page;
    let toast = page.search_by_name(&payload.name).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/candidates/search-email",
    request_body = EmailSearchInput,
    responses(
        (status = 200, description = "Email search result, or an error toast", body = CandidatesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn search_by_email(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EmailSearchInput>,
) -> Json<CandidatesActionResponse> {
    let page = &state.candidates_page;
    let toast = page.search_by_email(&payload.email).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/candidates/search-poste",
    request_body = PosteSearchInput,
    responses(
        (status = 200, description = "Position search result, or an error toast", body = CandidatesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn search_by_poste(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PosteSearchInput>,
) -> Json<CandidatesActionResponse> {
    let page = &state.candidates_page;
    let toast = page.search_by_poste(&payload.poste).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/candidates/by-id",
    request_body = CandidateIdInput,
    responses(
        (status = 200, description = "Single candidate, or an error toast", body = CandidatesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn load_by_id(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CandidateIdInput>,
) -> Json<CandidatesActionResponse> {
    let page = &state.candidates_page;
    let toast = page.load_by_id(&payload.candidate_id).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/candidates",
    request_body = NewCandidateForm,
    responses(
        (status = 200, description = "Created candidate, or an error toast", body = CandidatesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewCandidateForm>,
) -> Json<CandidatesActionResponse> {
    let page = &state.candidates_page;
    let toast = page.create(payload).await;
    Json(ActionResponse::new(toast, page.view()))
}
