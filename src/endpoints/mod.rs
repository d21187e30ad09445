pub mod players;
pub mod scoreboard;
