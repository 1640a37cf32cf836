use axum::{extract::State, response::Json};
use serde_json::Value as JsonValue;

use crate::{
    dto::page_dto::{ActionResponse, RecruitersActionResponse},
    pages::recruiters_page::RecruitersView,
    routes::extract::AppJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/recruiters",
    responses(
        (status = 200, description = "Current recruiters page", body = RecruitersView)
    )
)]
#[axum::debug_handler]
pub async fn get_recruiters_page(State(state): State<AppState>) -> Json<RecruitersView> {
    Json(state.recruiters_page.view())
}

#[utoipa::path(
    post,
    path = "/api/pages/recruiters",
    request_body = Object,
    responses(
        (status = 200, description = "Created recruiter, or an error toast", body = RecruitersActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_recruiter(
    State(state): State<AppState>,
    AppJson(payload): AppJson<JsonValue>,
) -> Json<RecruitersActionResponse> {
    let page = &state.recruiters_page;
    let toast = page.create(payload).await;
    Json(ActionResponse::new(toast, page.view()))
}
