use crate::validate::UrlValidation;
use async_trait::async_trait;
use kiosk_core::{
    Repository, ShortCode, ShortLink, ShortenParams, Shortener, ShortenerError, StorageError,
    UrlRecord,
};
use kiosk_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Tunables for a [`ShortenerService`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ShortenerSettings {
    /// How strictly candidate URLs are checked.
    #[builder(default)]
    pub validation: UrlValidation,
    /// Hand out the existing code when the URL was shortened before.
    ///
    /// This is the sequential-counter behaviour. The check and the insert are
    /// two separate repository calls, so two concurrent first-time requests
    /// for the same URL can still end up with two codes.
    #[builder(default = false)]
    pub reuse_existing: bool,
    /// How many generated codes to try before giving up on conflicts.
    #[builder(default = 8)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation
/// - Idempotent reuse of existing codes (when enabled)
/// - Code allocation, retrying with a fresh code on conflict
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self::from_shared(Arc::new(repository), generator, settings)
    }

    /// Creates a service over a repository that is also used elsewhere.
    pub fn from_shared(repository: Arc<R>, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
            settings,
        }
    }

    async fn allocate(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        let attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=attempts {
            let code: ShortCode = self.generator.generate().into();
            let record = UrlRecord::new(original_url);

            match self.repository.insert(&code, record).await {
                Ok(()) => return Ok(code),
                Err(StorageError::Conflict(_)) => {
                    debug!(code = %code, attempt, "generated code already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(attempts, "could not allocate a free short code");
        Err(ShortenerError::Exhausted(attempts))
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, params: ShortenParams) -> Result<ShortLink, ShortenerError> {
        self.settings.validation.check(&params.original_url).await?;

        if self.settings.reuse_existing {
            if let Some(code) = self.repository.find_by_url(&params.original_url).await? {
                trace!(code = %code, "reusing existing short code");
                return Ok(ShortLink {
                    code,
                    original_url: params.original_url,
                });
            }
        }

        let code = self.allocate(&params.original_url).await?;
        debug!(code = %code, url = %params.original_url, "shortened url");

        Ok(ShortLink {
            code,
            original_url: params.original_url,
        })
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlRecord>, ShortenerError> {
        let record = self.repository.get(code).await?;
        match &record {
            Some(record) => trace!(code = %code, url = %record.original_url, "resolved short code"),
            None => trace!(code = %code, "short code not found"),
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::ReadRepository;
    use kiosk_generator::{RandomSlugGenerator, SeqGenerator};
    use kiosk_storage::InMemoryRepository;
    use std::sync::Mutex;

    fn sequential() -> ShortenerService<InMemoryRepository, SeqGenerator> {
        ShortenerService::new(
            InMemoryRepository::new(),
            SeqGenerator::new(),
            ShortenerSettings::builder().reuse_existing(true).build(),
        )
    }

    fn random() -> ShortenerService<InMemoryRepository, RandomSlugGenerator> {
        ShortenerService::new(
            InMemoryRepository::new(),
            RandomSlugGenerator::default(),
            ShortenerSettings::default(),
        )
    }

    /// Replays a fixed list of codes.
    struct ScriptedGenerator(Mutex<Vec<&'static str>>);

    impl ScriptedGenerator {
        fn new(mut codes: Vec<&'static str>) -> Self {
            codes.reverse();
            Self(Mutex::new(codes))
        }
    }

    impl Generator for ScriptedGenerator {
        type Output = ShortCode;

        fn generate(&self) -> ShortCode {
            let next = self.0.lock().unwrap().pop().unwrap_or("fallback");
            ShortCode::new_unchecked(next)
        }
    }

    /// A repository whose backend is always down.
    struct UnavailableRepository;

    #[async_trait]
    impl ReadRepository for UnavailableRepository {
        async fn get(&self, _: &ShortCode) -> kiosk_core::error::Result<Option<UrlRecord>> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
        async fn find_by_url(&self, _: &str) -> kiosk_core::error::Result<Option<ShortCode>> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
        async fn highest_sequence(&self) -> kiosk_core::error::Result<Option<u64>> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
        async fn len(&self) -> kiosk_core::error::Result<u64> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
    }

    #[async_trait]
    impl Repository for UnavailableRepository {
        async fn insert(&self, _: &ShortCode, _: UrlRecord) -> kiosk_core::error::Result<()> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn shorten_then_lookup_round_trips() {
        let service = random();

        let link = service
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap();
        assert_eq!(link.original_url, "https://example.com");

        let record = service.lookup(&link.code).await.unwrap().unwrap();
        assert_eq!(record.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn original_url_is_stored_verbatim() {
        let service = sequential();
        let url = "HTTPS://Example.com/a/../b?q=1#frag";

        let link = service.shorten(ShortenParams::new(url)).await.unwrap();
        let record = service.lookup(&link.code).await.unwrap().unwrap();
        assert_eq!(record.original_url, url);
    }

    #[tokio::test]
    async fn invalid_url_stores_nothing() {
        let repository = Arc::new(InMemoryRepository::new());
        let service = ShortenerService::from_shared(
            Arc::clone(&repository),
            SeqGenerator::new(),
            ShortenerSettings::default(),
        );

        let err = service
            .shorten(ShortenParams::new("not a url"))
            .await
            .unwrap_err();

        assert!(matches!(err, ShortenerError::InvalidUrl(_)));
        assert_eq!(repository.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn sequential_codes_count_from_one() {
        let service = sequential();

        let first = service
            .shorten(ShortenParams::new("https://one.example"))
            .await
            .unwrap();
        let second = service
            .shorten(ShortenParams::new("https://two.example"))
            .await
            .unwrap();

        assert_eq!(first.code, ShortCode::sequence(1));
        assert_eq!(second.code, ShortCode::sequence(2));
    }

    #[tokio::test]
    async fn sequential_shortening_is_idempotent() {
        let service = sequential();

        let first = service
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap();
        let again = service
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap();

        assert_eq!(first.code, again.code);
        let next = service
            .shorten(ShortenParams::new("https://other.example"))
            .await
            .unwrap();
        assert_eq!(next.code, ShortCode::sequence(2));
    }

    #[tokio::test]
    async fn random_policy_allocates_fresh_slug_each_time() {
        let service = random();

        let first = service
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap();
        let second = service
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap();

        assert!(matches!(first.code, ShortCode::Slug(_)));
        assert_ne!(first.code, second.code);
    }

    #[tokio::test]
    async fn conflict_retries_with_next_code() {
        let repository = InMemoryRepository::new();
        repository
            .insert(&ShortCode::new_unchecked("taken"), UrlRecord::new("https://a.example"))
            .await
            .unwrap();

        let service = ShortenerService::new(
            repository,
            ScriptedGenerator::new(vec!["taken", "free"]),
            ShortenerSettings::default(),
        );

        let link = service
            .shorten(ShortenParams::new("https://b.example"))
            .await
            .unwrap();
        assert_eq!(link.code.to_string(), "free");
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let repository = InMemoryRepository::new();
        repository
            .insert(&ShortCode::new_unchecked("taken"), UrlRecord::new("https://a.example"))
            .await
            .unwrap();

        let service = ShortenerService::new(
            repository,
            ScriptedGenerator::new(vec!["taken", "taken", "taken"]),
            ShortenerSettings::builder().max_attempts(3).build(),
        );

        let err = service
            .shorten(ShortenParams::new("https://b.example"))
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::Exhausted(3)));
    }

    #[tokio::test]
    async fn sequential_counter_skips_codes_already_in_store() {
        let repository = InMemoryRepository::new();
        repository
            .insert(&ShortCode::sequence(1), UrlRecord::new("https://a.example"))
            .await
            .unwrap();

        let service = ShortenerService::new(
            repository,
            SeqGenerator::new(),
            ShortenerSettings::builder().reuse_existing(true).build(),
        );

        let link = service
            .shorten(ShortenParams::new("https://b.example"))
            .await
            .unwrap();
        assert_eq!(link.code, ShortCode::sequence(2));
    }

    #[tokio::test]
    async fn storage_failure_is_reported_not_retried() {
        let service = ShortenerService::new(
            UnavailableRepository,
            SeqGenerator::new(),
            ShortenerSettings::default(),
        );

        let err = service
            .shorten(ShortenParams::new("https://example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::Storage(StorageError::Unavailable(_))
        ));

        let err = service
            .lookup(&ShortCode::sequence(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::Storage(_)));
    }

    #[tokio::test]
    async fn lookup_unknown_code() {
        let service = sequential();
        let record = service.lookup(&ShortCode::sequence(99)).await.unwrap();
        assert!(record.is_none());
    }
}
