use serde::Serialize;
use utoipa::ToSchema;

use crate::pages::candidates_page::CandidatesView;
use crate::pages::processes_page::ProcessesView;
use crate::pages::recruiters_page::RecruitersView;
use crate::pages::rejection_email_page::RejectionEmailView;
use crate::pages::Toast;

/// What every page action returns: the notification to show and the page
/// as it looks afterwards.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    CandidatesActionResponse = ActionResponse<CandidatesView>,
    ProcessesActionResponse = ActionResponse<ProcessesView>,
    RecruitersActionResponse = ActionResponse<RecruitersView>,
    RejectionEmailActionResponse = ActionResponse<RejectionEmailView>
)]
pub struct ActionResponse<V> {
    pub toast: Toast,
    pub view: V,
}

impl<V> ActionResponse<V> {
    pub fn new(toast: Toast, view: V) -> Self {
        Self { toast, view }
    }
}
