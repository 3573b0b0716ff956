use crate::cli::IdPolicy;
use kiosk_core::{Repository, Shortener, StorageError};
use kiosk_generator::{RandomSlugGenerator, SeqGenerator};
use kiosk_shortener::{ShortenerService, ShortenerSettings, UrlValidation};
use std::sync::Arc;
use tracing::info;

/// Wires a shortener for `policy` over `repository`.
///
/// The sequential counter resumes after the highest numeric code already in
/// the store, so a persistent backend keeps counting across restarts.
pub async fn build_shortener<R: Repository>(
    repository: Arc<R>,
    policy: IdPolicy,
    validation: UrlValidation,
) -> Result<Arc<dyn Shortener>, StorageError> {
    info!(stored_links = repository.len().await?, "short link store ready");

    let shortener: Arc<dyn Shortener> = match policy {
        IdPolicy::Sequential => {
            let generator = SeqGenerator::resume_after(repository.highest_sequence().await?);
            info!(next_id = generator.peek(), %validation, "using sequential short ids");
            let settings = ShortenerSettings::builder()
                .validation(validation)
                .reuse_existing(true)
                .build();
            Arc::new(ShortenerService::from_shared(repository, generator, settings))
        }
        IdPolicy::Random => {
            info!(%validation, "using random short slugs");
            let settings = ShortenerSettings::builder().validation(validation).build();
            Arc::new(ShortenerService::from_shared(
                repository,
                RandomSlugGenerator::default(),
                settings,
            ))
        }
    };

    Ok(shortener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::{ShortCode, ShortenParams, UrlRecord};
    use kiosk_storage::InMemoryRepository;

    #[tokio::test]
    async fn sequential_resumes_after_existing_codes() {
        let repository = Arc::new(InMemoryRepository::new());
        repository
            .insert(&ShortCode::sequence(41), UrlRecord::new("https://a.example"))
            .await
            .unwrap();

        let shortener = build_shortener(repository, IdPolicy::Sequential, UrlValidation::Syntax)
            .await
            .unwrap();
        let link = shortener
            .shorten(ShortenParams::new("https://b.example"))
            .await
            .unwrap();

        assert_eq!(link.code, ShortCode::sequence(42));
    }

    #[tokio::test]
    async fn random_policy_hands_out_slugs() {
        let shortener = build_shortener(
            Arc::new(InMemoryRepository::new()),
            IdPolicy::Random,
            UrlValidation::Syntax,
        )
        .await
        .unwrap();

        let link = shortener
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap();
        assert!(matches!(link.code, ShortCode::Slug(_)));
    }
}
