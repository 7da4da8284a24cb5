use serde::Serialize;

use crate::domain::value_objects::GameType;

/// Catalog entry for a mini-game with a create flow
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCatalogEntry {
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub name: &'static str,
    pub min_players: u8,
    pub max_players: u8,
    pub create_path: String,
}

/// List the mini-games players can create sessions for
pub fn game_catalog() -> Vec<GameCatalogEntry> {
    GameType::ALL
        .iter()
        .map(|game| {
            let range = game.player_range();
            GameCatalogEntry {
                game_type: *game,
                name: game.display_name(),
                min_players: range.min,
                max_players: range.max,
                create_path: game.create_path(),
            }
        })
        .collect()
}
