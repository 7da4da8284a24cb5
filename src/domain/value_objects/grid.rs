use serde::Serialize;

use super::PlayerCount;

/// Fixed board width for battleship sessions
pub const GRID_WIDTH: u32 = 8;

/// Board height for the smallest (two player) game
const BASE_GRID_HEIGHT: u32 = 8;

/// Extra rows added per player beyond the second
const ROWS_PER_EXTRA_PLAYER: u32 = 3;

/// Board height for a battleship session.
///
/// Callers pass a count that is at least 2; smaller values saturate to the base height.
pub fn derive_grid_height(player_count: u8) -> u32 {
    let extra_players = u32::from(player_count.saturating_sub(2));
    BASE_GRID_HEIGHT + extra_players * ROWS_PER_EXTRA_PLAYER
}

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub fn for_players(player_count: PlayerCount) -> Self {
        Self {
            width: GRID_WIDTH,
            height: derive_grid_height(player_count.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_height_examples() {
        assert_eq!(derive_grid_height(2), 8);
        assert_eq!(derive_grid_height(3), 11);
        assert_eq!(derive_grid_height(4), 14);
        assert_eq!(derive_grid_height(10), 32);
    }

    #[test]
    fn test_grid_height_formula_over_valid_range() {
        for n in 2u8..=10 {
            let expected = 8 + (u32::from(n) - 2) * 3;
            assert_eq!(derive_grid_height(n), expected);

            let dims = GridDimensions::for_players(PlayerCount::from_stored(n));
            assert_eq!(dims.width, 8);
            assert_eq!(dims.height, expected);
        }
    }
}
