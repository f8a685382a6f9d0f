//! Interactive move sources.

mod human;

pub use human::{HumanPlayer, prompt_side};
