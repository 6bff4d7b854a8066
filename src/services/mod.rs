pub mod submission;
pub mod validation;
