// ═══════════════════════════════════════════════════════════════════════
// Leader effects — a small text-matched ability set
//
// Leader ability text is free-form prose on the card. The recognized
// effects form a closed enum; anything that fails to parse is a no-op and
// is never extended silently.
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Board;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderEffect {
    ClearWeather,
    SetWeather(WeatherKind),
    RowHorn(Row),
}

impl LeaderEffect {
    /// Substring matching on a lowercased copy of the ability text.
    pub fn parse(text: &str) -> Option<LeaderEffect> {
        let t = text.to_lowercase();
        if t.contains("clear") && t.contains("weather") {
            return Some(LeaderEffect::ClearWeather);
        }
        if t.contains("biting frost") {
            return Some(LeaderEffect::SetWeather(WeatherKind::BitingFrost));
        }
        if t.contains("impenetrable fog") {
            return Some(LeaderEffect::SetWeather(WeatherKind::ImpenetrableFog));
        }
        if t.contains("torrential rain") {
            return Some(LeaderEffect::SetWeather(WeatherKind::TorrentialRain));
        }
        if t.contains("skellige storm") {
            return Some(LeaderEffect::SetWeather(WeatherKind::SkelligeStorm));
        }
        // Commander's Horn-like row doubling.
        let horn_wording = t.contains("double") || t.contains("commander");
        if horn_wording && (t.contains("melee") || t.contains("close")) {
            return Some(LeaderEffect::RowHorn(Row::Melee));
        }
        if horn_wording && (t.contains("ranged") || t.contains("range")) {
            return Some(LeaderEffect::RowHorn(Row::Ranged));
        }
        if horn_wording && t.contains("siege") {
            return Some(LeaderEffect::RowHorn(Row::Siege));
        }
        None
    }

    pub fn apply(self, board: &mut Board, player: &PlayerId) {
        match self {
            LeaderEffect::ClearWeather => board.clear_weather(),
            LeaderEffect::SetWeather(kind) => board.apply_weather(kind),
            LeaderEffect::RowHorn(row) => board.set_row_horn(player, row),
        }
    }
}

/// Returns whether an effect was recognized and applied.
pub fn activate_leader(board: &mut Board, player: &PlayerId, ability_text: &str) -> bool {
    match LeaderEffect::parse(ability_text) {
        Some(effect) => {
            effect.apply(board, player);
            true
        }
        None => false,
    }
}
