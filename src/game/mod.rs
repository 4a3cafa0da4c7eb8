pub mod board;
pub mod fen;
pub mod legality;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod square;
pub mod templates;

pub use board::*;
pub use fen::*;
pub use moves::*;
pub use pieces::*;
pub use square::*;
pub use templates::*;
