use axum::{extract::State, response::Json};

use crate::{
    dto::page_dto::{ActionResponse, ProcessesActionResponse},
    dto::process_dto::NewProcessForm,
    pages::processes_page::ProcessesView,
    routes::extract::AppJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/processes",
    responses(
        (status = 200, description = "Current processes page", body = ProcessesView)
    )
)]
#[axum::debug_handler]
pub async fn get_processes_page(State(state): State<AppState>) -> Json<ProcessesView> {
    Json(state.processes_page.view())
}

#[utoipa::path(
    post,
    path = "/api/pages/processes/load",
    responses(
        (status = 200, description = "Refreshed process list, or an error toast", body = ProcessesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn load_processes(State(state): State<AppState>) -> Json<ProcessesActionResponse> {
    let page = &state.processes_page;
    let toast = page.load_all().await;
    Json(ActionResponse::new(toast, page.view()))
}

#[utoipa::path(
    post,
    path = "/api/pages/processes",
    request_body = NewProcessForm,
    responses(
        (status = 200, description = "Created process, or an error toast", body = ProcessesActionResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_process(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewProcessForm>,
) -> Json<ProcessesActionResponse> {
    let page = &state.processes_page;
    let toast = page.create(payload).await;
    Json(ActionResponse::new(toast, page.view()))
}
