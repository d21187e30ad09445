use crate::error::StatsError;

/// Role token for the role leaderboard, normalized to trimmed uppercase
/// (the service matches roles case-insensitively by upcasing its side too).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQuery(String);

impl RoleQuery {
    pub fn parse(input: &str) -> Result<Self, StatsError> {
        let role = input.trim().to_uppercase();
        if role.is_empty() {
            return Err(StatsError::EmptyInput("role"));
        }
        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-empty player name. The service does exact-match lookups, so
/// no further normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery(String);

impl PlayerQuery {
    pub fn parse(input: &str) -> Result<Self, StatsError> {
        Self::parse_field(input, "player name")
    }

    fn parse_field(input: &str, field: &'static str) -> Result<Self, StatsError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(StatsError::EmptyInput(field));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two independent player names for a head-to-head comparison. Either side
/// being empty aborts the whole operation before any request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareQuery {
    pub player1: PlayerQuery,
    pub player2: PlayerQuery,
}

impl CompareQuery {
    pub fn parse(first: &str, second: &str) -> Result<Self, StatsError> {
        Ok(Self {
            player1: PlayerQuery::parse_field(first, "player1")?,
            player2: PlayerQuery::parse_field(second, "player2")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    #[test]
    fn role_is_trimmed_and_upcased() {
        let role = RoleQuery::parse("  jungle \n").unwrap();
        assert_eq!(role.as_str(), "JUNGLE");
    }

    #[test]
    fn empty_role_is_a_cancellation() {
        let err = RoleQuery::parse("   ").unwrap_err();
        assert!(matches!(err, StatsError::EmptyInput("role")));
        assert!(err.is_cancellation());
    }

    #[test]
    fn player_name_keeps_inner_spacing() {
        let player = PlayerQuery::parse(" Twisted Fate ").unwrap();
        assert_eq!(player.as_str(), "Twisted Fate");
    }

    #[test]
    fn compare_rejects_either_empty_side() {
        assert!(matches!(
            CompareQuery::parse("", "Aiden"),
            Err(StatsError::EmptyInput("player1"))
        ));
        assert!(matches!(
            CompareQuery::parse("Aiden", "  "),
            Err(StatsError::EmptyInput("player2"))
        ));
        let query = CompareQuery::parse("Aiden", "Bo").unwrap();
        assert_eq!(query.player1.as_str(), "Aiden");
        assert_eq!(query.player2.as_str(), "Bo");
    }
}
