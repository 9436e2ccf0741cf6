//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated
//! from board storage so the search can compose them freely.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{Outcome, is_full, outcome, terminal, utility};
pub use turn::{actions, player, result};
pub use win::{LINES, winner};
