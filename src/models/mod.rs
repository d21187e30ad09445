pub mod comparison;
pub mod player;
pub mod scoreboard;
