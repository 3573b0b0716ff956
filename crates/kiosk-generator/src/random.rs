use crate::Generator;
use kiosk_core::ShortCode;
use rand::Rng;
use typed_builder::TypedBuilder;

const MAX_ENTROPY_BYTES: usize = 16;

/// Generates short random slugs by base58-encoding random bytes.
///
/// Five bytes (the default) encode to six or seven characters and give
/// roughly 10^12 possible slugs. Uniqueness is not guaranteed; the shortener
/// retries with a fresh slug when the store reports a conflict.
///
/// Slugs made only of digits are drawn again, so a random slug never reads
/// back as a sequential id.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomSlugGenerator {
    /// Number of random bytes per slug, clamped to `1..=16`.
    #[builder(default = 5, setter(transform = |n: usize| n.clamp(1, MAX_ENTROPY_BYTES)))]
    entropy_bytes: usize,
}

impl Default for RandomSlugGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RandomSlugGenerator {
    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bytes
    }
}

impl Generator for RandomSlugGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let mut bytes = vec![0u8; self.entropy_bytes];
        loop {
            rng.fill(bytes.as_mut_slice());
            let slug = bs58::encode(&bytes).into_string();
            if !slug.bytes().all(|b| b.is_ascii_digit()) {
                // base58 output is always alphanumeric, so it is a valid slug.
                return ShortCode::new_unchecked(slug);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_valid_short_codes() {
        let generator = RandomSlugGenerator::default();

        for _ in 0..100 {
            let code = generator.generate();
            let raw = code.to_string();
            assert!(!raw.is_empty() && raw.len() <= 7, "unexpected slug {raw}");
            assert!(ShortCode::slug(raw).is_ok());
        }
    }

    #[test]
    fn slugs_rarely_repeat() {
        let generator = RandomSlugGenerator::default();
        let codes: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();
        assert!(codes.len() > 990);
    }

    #[test]
    fn slugs_never_look_sequential() {
        // One byte encodes to one or two characters, often all digits.
        let generator = RandomSlugGenerator::builder().entropy_bytes(1).build();

        for _ in 0..2000 {
            let code = generator.generate();
            assert_eq!(code.as_sequence(), None, "{code}");
            assert!(!code.to_string().bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn entropy_is_clamped() {
        assert_eq!(
            RandomSlugGenerator::builder().entropy_bytes(0).build().entropy_bytes(),
            1
        );
        assert_eq!(
            RandomSlugGenerator::builder().entropy_bytes(64).build().entropy_bytes(),
            16
        );
    }

    #[test]
    fn widest_slug_fits_short_code_limit() {
        let generator = RandomSlugGenerator::builder().entropy_bytes(16).build();
        let code = generator.generate();
        assert!(ShortCode::slug(code.to_string()).is_ok());
    }
}
