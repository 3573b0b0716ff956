use super::Scalar;
use kiosk_tracker::ExerciseInput;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<Scalar>,
    #[serde(default)]
    pub date: Option<String>,
}

impl From<ExerciseRequest> for ExerciseInput {
    fn from(request: ExerciseRequest) -> Self {
        ExerciseInput {
            description: request.description.unwrap_or_default(),
            duration: request.duration.map(Scalar::into_text).unwrap_or_default(),
            date: request.date,
        }
    }
}
