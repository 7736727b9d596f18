pub mod content;
pub mod submission;
pub mod validation;
