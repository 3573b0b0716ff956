//! Short code generators.
//!
//! Two allocation policies are provided: [`seq::SeqGenerator`] hands out
//! consecutive integers, [`random::RandomSlugGenerator`] hands out short
//! base58 slugs.

pub mod random;
pub mod seq;

use kiosk_core::ShortCode;

pub use random::RandomSlugGenerator;
pub use seq::SeqGenerator;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates the next candidate code.
    ///
    /// Sequential generators never repeat within an instance; random
    /// generators may, and callers are expected to retry on conflict.
    fn generate(&self) -> Self::Output;
}
