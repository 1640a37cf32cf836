pub mod candidate_dto;
pub mod feedback_dto;
pub mod page_dto;
pub mod process_dto;
