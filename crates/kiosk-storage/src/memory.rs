use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use kiosk_core::error::{Result, StorageError};
use kiosk_core::repository::{ReadRepository, Repository, UrlRecord};
use kiosk_core::shortcode::ShortCode;

/// In-memory implementation of the Repository trait using DashMap.
///
/// Besides the code → record map it keeps a url → code index so that
/// sequential shortening can hand out the same code for a repeated URL.
/// Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    links: DashMap<String, UrlRecord>,
    by_url: DashMap<String, ShortCode>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.links.get(&code.key()).map(|record| record.clone()))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortCode>> {
        Ok(self.by_url.get(original_url).map(|code| code.clone()))
    }

    async fn highest_sequence(&self) -> Result<Option<u64>> {
        Ok(self
            .links
            .iter()
            .filter_map(|link| ShortCode::parse(link.key()).ok()?.as_sequence())
            .max())
    }

    async fn len(&self) -> Result<u64> {
        Ok(self.links.len() as u64)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        let original_url = record.original_url.clone();

        // The entry guard makes check-and-insert atomic per code.
        match self.links.entry(code.key()) {
            Entry::Occupied(_) => return Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }

        // First code wins the reverse index.
        self.by_url.entry(original_url).or_insert_with(|| code.clone());
        Ok(())
    }
}
