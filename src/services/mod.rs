pub mod api_client;
pub mod candidate_service;
pub mod feedback_service;
pub mod process_service;
pub mod recruiter_service;
