//! Game rules: win condition checking

pub mod win;

pub use win::{find_winning_line, is_winning_move};
