use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the overall scoreboard. Metric cells are kept as raw JSON
/// values: the service pre-formats most of them ("Win Rate" arrives as a
/// decorated string, the averages with two decimals) and this side displays
/// whatever it receives. A field the service omits defaults to `Null` and
/// renders as an empty cell instead of failing deserialization.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerRow {
    #[serde(rename = "Player", default)]
    pub player: Value,
    #[serde(rename = "Wins", default)]
    pub wins: Value,
    #[serde(rename = "Games", default)]
    pub games: Value,
    #[serde(rename = "Win Rate", default)]
    pub win_rate: Value,
    #[serde(rename = "Avg KDA", default)]
    pub avg_kda: Value,
    #[serde(rename = "Avg CS/m", default)]
    pub avg_cs_per_minute: Value,
    #[serde(rename = "DPM", default)]
    pub damage_per_minute: Value,
    #[serde(rename = "Score", default)]
    pub score: Value,
    #[serde(default)]
    pub roles: Value,
    /// The service sends more metrics than the scoreboard shows (GPM, KPP,
    /// vision, objective counts); tolerated but never rendered.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A role leaderboard row. Same shape as [`PlayerRow`] minus the roles
/// column; the row's own `role` field ends up in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RoleRow {
    #[serde(rename = "Player", default)]
    pub player: Value,
    #[serde(rename = "Wins", default)]
    pub wins: Value,
    #[serde(rename = "Games", default)]
    pub games: Value,
    #[serde(rename = "Win Rate", default)]
    pub win_rate: Value,
    #[serde(rename = "Avg KDA", default)]
    pub avg_kda: Value,
    #[serde(rename = "Avg CS/m", default)]
    pub avg_cs_per_minute: Value,
    #[serde(rename = "DPM", default)]
    pub damage_per_minute: Value,
    #[serde(rename = "Score", default)]
    pub score: Value,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_tolerates_extra_metrics() {
        let row: PlayerRow = serde_json::from_value(json!({
            "Player": "Aiden",
            "Wins": 5,
            "Games": 6,
            "Win Rate": "🟢 83.33%",
            "Avg KDA": "4.51",
            "Avg CS/m": "7.90",
            "DPM": "612.44",
            "Avg GPM": "420.10",
            "KPP": "55.00%",
            "Vision Score": "21.30",
            "Score": 87.12,
            "roles": "TOP, MIDDLE"
        }))
        .unwrap();
        assert_eq!(row.player, json!("Aiden"));
        assert_eq!(row.win_rate, json!("🟢 83.33%"));
        assert_eq!(row.extra.get("KPP"), Some(&json!("55.00%")));
    }

    #[test]
    fn missing_fields_default_to_null() {
        let row: RoleRow = serde_json::from_value(json!({ "Player": "Bo" })).unwrap();
        assert!(row.wins.is_null());
        assert!(row.score.is_null());
    }
}
