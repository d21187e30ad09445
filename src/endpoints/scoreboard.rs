use crate::client::StatsClient;
use crate::error::StatsError;
use crate::models::scoreboard::{PlayerRow, RoleRow};
use crate::request::RoleQuery;

impl StatsClient {
    /// Full scoreboard: every player, already ranked by composite score on
    /// the service side.
    pub async fn scoreboard(&self) -> Result<Vec<PlayerRow>, StatsError> {
        self.get_json("/scoreboard", &[]).await
    }

    /// Leaderboard restricted to one positional role.
    pub async fn role_leaderboard(&self, role: &RoleQuery) -> Result<Vec<RoleRow>, StatsError> {
        self.get_json("/role_leaderboard", &[("role", role.as_str())])
            .await
    }
}
