//! HTTP surface of Kiosk.
//!
//! [`app::App::router`] builds the axum router over an [`state::AppState`];
//! the `kiosk` binary wires storage, telemetry and configuration around it.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
