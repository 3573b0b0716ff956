//! Core types and traits for the Kiosk short-link allocator.
//!
//! This crate provides the shared vocabulary used by the storage backends,
//! the id generators, the shortener service and the HTTP gateway.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::{ShortLink, ShortenParams, Shortener};
