pub mod aggregate;
pub mod app;
pub mod chart;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod session;
pub mod ui;
pub mod window;

pub use app::router;
pub use provider::{HealthProvider, MockPolicy, SimulatedProvider};
pub use session::AppState;
pub use window::WeekWindow;
