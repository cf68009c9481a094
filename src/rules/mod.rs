//! Win and draw detection for tic-tac-toe.

mod draw;
mod win;

pub(crate) use draw::is_full;
pub(crate) use win::check_winner;
