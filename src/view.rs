use crate::client::StatsClient;
use crate::display::{DisplayRegion, RenderTicket};
use crate::error::StatsError;
use crate::render;
use crate::request::{CompareQuery, PlayerQuery, RoleQuery};

/// Ties one fetch to one render and one region replacement.
///
/// Failure policy is uniform: transport errors, non-2xx statuses and bad
/// bodies all collapse to a single fixed `Failed to …` message, with the
/// structured error written to the log instead. Empty user input is
/// cancellation: no request, no message, region untouched. Each method
/// returns whether the region was replaced (false on cancellation or when a
/// later operation superseded this one).
pub struct StatsView {
    client: StatsClient,
    region: DisplayRegion,
}

impl StatsView {
    pub fn new(client: StatsClient) -> Self {
        Self {
            client,
            region: DisplayRegion::new(),
        }
    }

    pub fn region(&self) -> &DisplayRegion {
        &self.region
    }

    pub fn client(&self) -> &StatsClient {
        &self.client
    }

    pub async fn show_scoreboard(&self) -> bool {
        let ticket = self.region.begin();
        match self.client.scoreboard().await {
            Ok(rows) => self.region.commit(ticket, render::scoreboard(&rows)),
            Err(err) => self.fail(ticket, err, "Failed to fetch scoreboard.".to_string()),
        }
    }

    pub async fn show_role_leaderboard(&self, role_input: &str) -> bool {
        let Some(role) = cancelled_if_empty(RoleQuery::parse(role_input)) else {
            return false;
        };
        let ticket = self.region.begin();
        match self.client.role_leaderboard(&role).await {
            Ok(rows) => self
                .region
                .commit(ticket, render::role_leaderboard(&rows, &role)),
            Err(err) => self.fail(
                ticket,
                err,
                format!("Failed to fetch role leaderboard for {role}."),
            ),
        }
    }

    pub async fn show_player_stats(&self, name_input: &str) -> bool {
        let Some(player) = cancelled_if_empty(PlayerQuery::parse(name_input)) else {
            return false;
        };
        let ticket = self.region.begin();
        match self.client.player_stats(&player).await {
            Ok(detail) => self.region.commit(ticket, render::player_stats(&detail)),
            Err(err) => self.fail(ticket, err, format!("Failed to fetch stats for {player}.")),
        }
    }

    pub async fn show_comparison(&self, first_input: &str, second_input: &str) -> bool {
        let Some(query) = cancelled_if_empty(CompareQuery::parse(first_input, second_input))
        else {
            return false;
        };
        let ticket = self.region.begin();
        match self.client.compare(&query).await {
            Ok(result) => self.region.commit(ticket, render::comparison(&result)),
            Err(err) => self.fail(
                ticket,
                err,
                format!(
                    "Failed to compare {} and {}.",
                    query.player1, query.player2
                ),
            ),
        }
    }

    pub async fn show_progress(&self, name_input: &str) -> bool {
        let Some(player) = cancelled_if_empty(PlayerQuery::parse(name_input)) else {
            return false;
        };
        let ticket = self.region.begin();
        match self.client.progress(&player).await {
            Ok(chart) => self
                .region
                .commit(ticket, render::progress(&chart, &player)),
            Err(err) => self.fail(
                ticket,
                err,
                format!("Failed to fetch progress for {player}."),
            ),
        }
    }

    pub async fn run_update(&self) -> bool {
        let ticket = self.region.begin();
        match self.client.trigger_update().await {
            Ok(ack) => self.region.commit(ticket, render::update_ack(&ack)),
            Err(err) => self.fail(ticket, err, "Failed to update data.".to_string()),
        }
    }

    /// Diagnostic detail goes to the log; the user sees one fixed message.
    fn fail(&self, ticket: RenderTicket, err: StatsError, message: String) -> bool {
        match &err {
            StatsError::Status { status, body } => {
                tracing::error!(%status, %body, "{message}")
            }
            other => tracing::error!(error = %other, "{message}"),
        }
        self.region.commit(ticket, render::error_message(&message))
    }
}

/// Empty input is user cancellation, logged at debug level only.
fn cancelled_if_empty<T>(parsed: Result<T, StatsError>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(err) => {
            debug_assert!(err.is_cancellation());
            tracing::debug!(%err, "operation cancelled");
            None
        }
    }
}
