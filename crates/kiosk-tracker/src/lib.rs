//! In-memory exercise tracker: users, their logged exercises and
//! date-filtered exercise logs.

pub mod error;
pub mod model;
pub mod store;

pub use error::TrackerError;
pub use model::{ExerciseEntry, ExerciseInput, ExerciseLog, LogEntry, LogQuery, User};
pub use store::TrackerStore;
