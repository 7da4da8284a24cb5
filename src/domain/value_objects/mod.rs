mod game_type;
mod grid;
mod join_code;
mod player_count;

pub use game_type::*;
pub use grid::*;
pub use join_code::*;
pub use player_count::*;
