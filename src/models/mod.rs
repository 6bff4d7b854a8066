pub mod complaint;
pub mod status;
