pub mod play_status;

pub use play_status::PlayStatus;
