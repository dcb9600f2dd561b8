pub mod dto;
pub mod service;

pub use dto::StatusView;
pub use service::StatusService;
