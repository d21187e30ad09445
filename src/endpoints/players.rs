use crate::client::StatsClient;
use crate::error::StatsError;
use crate::models::comparison::ComparisonResult;
use crate::models::player::{PlayerDetail, ProgressChart, UpdateAck};
use crate::request::{CompareQuery, PlayerQuery};

impl StatsClient {
    /// Stats for one player by exact name. The service answers 404 for an
    /// unknown name; that comes back as `StatsError::Status`.
    pub async fn player_stats(&self, player: &PlayerQuery) -> Result<PlayerDetail, StatsError> {
        self.get_json("/stats", &[("player_name", player.as_str())])
            .await
    }

    /// Head-to-head comparison of two players.
    pub async fn compare(&self, query: &CompareQuery) -> Result<ComparisonResult, StatsError> {
        self.get_json(
            "/compare",
            &[
                ("player1", query.player1.as_str()),
                ("player2", query.player2.as_str()),
            ],
        )
        .await
    }

    /// Score-over-games progression chart for one player, rendered upstream.
    pub async fn progress(&self, player: &PlayerQuery) -> Result<ProgressChart, StatsError> {
        self.get_json("/progress", &[("player_name", player.as_str())])
            .await
    }

    /// Ask the service to re-ingest its replay folder.
    pub async fn trigger_update(&self) -> Result<UpdateAck, StatsError> {
        self.post_json("/update").await
    }
}
