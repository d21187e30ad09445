pub mod client;
pub mod display;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod render;
pub mod request;
pub mod view;

pub use client::{StatsClient, DEFAULT_BASE_URL};
pub use display::DisplayRegion;
pub use error::StatsError;
pub use request::{CompareQuery, PlayerQuery, RoleQuery};
pub use view::StatsView;
