//! Date interpreter behind the `/api/timestamp` endpoint.
//!
//! [`interpret`] decides whether its input is "now", an epoch-millisecond
//! timestamp or a calendar date string, and renders the instant both as
//! epoch milliseconds and as an RFC 9110 (`Thu, 01 Jan 1970 00:00:00 GMT`)
//! string.

pub mod calendar;
pub mod interpret;

pub use interpret::{interpret, interpret_at, TimestampResult, INVALID_DATE};
