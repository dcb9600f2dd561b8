mod status_game;

pub use status_game::StatusGame;
