pub mod app;
pub mod calendar;
pub mod calendar_view;
pub mod challenge;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod ledger;
pub mod models;
pub mod state;
pub mod store;
pub mod streak;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use store::HabitStore;
