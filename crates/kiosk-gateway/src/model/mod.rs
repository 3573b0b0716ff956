mod file;
mod health;
mod scalar;
mod shorturl;
mod tools;
mod tracker;

pub use file::FileMetadata;
pub use health::{HealthResponse, HelloResponse};
pub use scalar::Scalar;
pub use shorturl::{ShortenRequest, ShortenResponse};
pub use tools::{CalculateRequest, ConvertRequest, ResultResponse};
pub use tracker::{CreateUserRequest, ExerciseRequest};
