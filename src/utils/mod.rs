pub mod clipboard;
pub mod time;
pub mod validation;
