use kiosk_core::Shortener;
use kiosk_tracker::TrackerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    tracker: Arc<TrackerStore>,
    base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        tracker: Arc<TrackerStore>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            tracker,
            base_url: public_base_url.into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn tracker(&self) -> &TrackerStore {
        &self.tracker
    }

    /// Public origin under which short links are reachable.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
