pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::StatusGame;
pub use repository::StatusRepository;
pub use value_objects::PlayStatus;
