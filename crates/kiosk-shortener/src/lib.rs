//! Short-link allocator.
//!
//! [`ShortenerService`] validates candidate URLs, asks a
//! [`Generator`](kiosk_generator::Generator) for a code and stores the
//! mapping in a [`Repository`](kiosk_core::Repository). Core types are
//! re-exported from `kiosk_core`.

pub mod service;
pub mod validate;

pub use kiosk_core::{ShortCode, ShortLink, ShortenParams, Shortener, ShortenerError};
pub use service::{ShortenerService, ShortenerSettings};
pub use validate::UrlValidation;
