use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stats for one player, looked up by exact name. Singular object, not an
/// array; an unknown player surfaces as a request failure from the service,
/// never as an empty record.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerDetail {
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
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Per-game score progression chart, pre-rendered upstream and delivered as
/// a data-URI image.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProgressChart {
    #[serde(default)]
    pub image: String,
}

/// Acknowledgement for a re-ingest trigger.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateAck {
    #[serde(default)]
    pub message: String,
}
