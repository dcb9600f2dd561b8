pub mod catalog;
pub mod ranking;
pub mod status;
