pub mod candidate;
pub mod feedback;
pub mod interview;
pub mod process;
pub mod recruiter;
