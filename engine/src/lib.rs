pub mod types;
pub mod error;
pub mod board;
pub mod round;
pub mod game;
pub mod effects;
pub mod catalog;


pub use board::{Board, CardFlags, PlayEvents, RowState, RowSet, WeatherMap};
pub use error::EngineError;
pub use game::Match;
pub use round::Round;
pub use types::*;
