use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use kiosk_timestamp::TimestampResult;

type TimestampResponse = (StatusCode, Json<TimestampResult>);

pub async fn now_handler() -> TimestampResponse {
    respond(kiosk_timestamp::interpret(None))
}

/// A date segment that cannot be decoded (e.g. invalid UTF-8) is an invalid date.
pub async fn timestamp_handler(
    date: Result<Path<String>, PathRejection>,
) -> TimestampResponse {
    match date {
        Ok(Path(date)) => respond(kiosk_timestamp::interpret(Some(&date))),
        Err(_) => respond(TimestampResult::invalid()),
    }
}

fn respond(result: TimestampResult) -> TimestampResponse {
    let status = if result.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result))
}
