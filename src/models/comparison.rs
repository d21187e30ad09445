use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Head-to-head record for two players. `stats` maps metric name to the two
/// sides' values; the renderer picks its metrics out of the map in a fixed
/// order and a metric the service omits renders with blank sides.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ComparisonResult {
    #[serde(default)]
    pub player1: Value,
    #[serde(default)]
    pub player2: Value,
    #[serde(default)]
    pub stats: HashMap<String, MetricPair>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MetricPair {
    #[serde(default)]
    pub player1: Value,
    #[serde(default)]
    pub player2: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comparison_deserializes_service_shape() {
        let result: ComparisonResult = serde_json::from_value(json!({
            "player1": "Aiden",
            "player2": "Bo",
            "stats": {
                "Wins": { "player1": 5, "player2": 3 },
                "Win Rate": { "player1": "🟢 83.33%", "player2": "🟡 50.00%" }
            }
        }))
        .unwrap();
        assert_eq!(result.player1, json!("Aiden"));
        let wins = &result.stats["Wins"];
        assert_eq!(wins.player1, json!(5));
        assert_eq!(wins.player2, json!(3));
    }
}
