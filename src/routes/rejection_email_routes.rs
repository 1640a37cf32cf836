use axum::{extract::State, response::Json};

use crate::{
    dto::feedback_dto::{CandidateSearchInput, GenerateEmailInput},
    dto::page_dto::{ActionResponse, RejectionEmailActionResponse},
    pages::rejection_email_page::RejectionEmailView,
    routes::extract::AppJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/rejection-email",
    responses(
        (status = 200, description = "Current rejection email page", body = RejectionEmailView)
    )
)]
#[axum::debug_handler]
pub async fn get_rejection_email_page(
    State(state): State<AppState>,
) -> Json<RejectionEmailView> {
    Json(state.rejection_email_page.view())
}

#[utoipa::path(
    post,
    path = "/api/pages/rejection-email/search",
    request_body = CandidateSearchInput,
    responses(
        (status = 200, description = "Matching candidates, or an error toast", body = RejectionEmailActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn search_candidates(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CandidateSearchInput>,
) -> Json<RejectionEmailActionResponse> {
    let page = &state.rejection_email_page;
    let toast = page.search(&payload.term).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/rejection-email/generate",
    request_body = GenerateEmailInput,
    responses(
        (status = 200, description = "Generated email, or an error toast", body = RejectionEmailActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn generate_email(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateEmailInput>,
) -> Json<RejectionEmailActionResponse> {
    let page = &state.rejection_email_page;
    let toast = page.generate(payload.candidate_id).await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/rejection-email/copy",
    responses(
        (status = 200, description = "Copy outcome; `view.copied` holds the copied text", body = RejectionEmailActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn copy_email(
    State(state): State<AppState>,
) -> Json<RejectionEmailActionResponse> {
    let page = &state.rejection_email_page;
    let toast = page.copy();
    Json(ActionResponse::new(toast, page.view()))
}
