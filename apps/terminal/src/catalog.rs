//! # Catalog Manager
//!
//! Search, pagination and fetch orchestration for the car catalog.
//!
//! ## Debounce Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Search Debounce                                    │
//! │                                                                         │
//! │  keystroke "i" ──► arm 1000ms timer ─────────────┐                     │
//! │  keystroke "ib" ─► abort pending, arm fresh ─────┤  only the FINAL     │
//! │  keystroke "" ───► abort pending, arm fresh ─────┤  pending timer      │
//! │                                                  ▼  fires the fetch    │
//! │                                  page := 1, fetch("")                  │
//! │                                                                         │
//! │  Last write wins. In-flight requests are NOT cancelled: a slow older   │
//! │  response can still land after a newer one if the network reorders     │
//! │  them. Known race, inherited behavior, deliberately left unhandled.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Page transitions validate the target, apply the cosmetic fade delay and
//! refetch. The loading flag brackets every fetch so shells can show a
//! spinner keyed to it.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use rideline_api::{ApiResult, CarQuery, CarsApi};
use rideline_core::pagination;
use rideline_core::{CarPage, PAGE_FADE_MS, SEARCH_DEBOUNCE_MS};

use crate::state::CarsState;

// =============================================================================
// Car Source Seam
// =============================================================================

/// Where catalog pages come from. Production uses [`CarsApi`]; tests plug
/// in a recording stub.
#[async_trait]
pub trait CarSource: Send + Sync + 'static {
    async fn fetch_page(&self, query: &CarQuery) -> ApiResult<CarPage>;
}

#[async_trait]
impl CarSource for CarsApi {
    async fn fetch_page(&self, query: &CarQuery) -> ApiResult<CarPage> {
        self.list(query).await
    }
}

// =============================================================================
// Catalog Manager
// =============================================================================

/// Orchestrates search text, the current page and fetches against shared
/// [`CarsState`]. Cloning shares all state; the clone inside the debounce
/// task observes the same text and page as its parent.
#[derive(Debug)]
pub struct CatalogManager<S> {
    source: S,
    state: CarsState,
    query: Arc<Mutex<String>>,
    page: Arc<AtomicU32>,
    limit: u32,
    searching: Arc<AtomicBool>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<S> Clone for CatalogManager<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        CatalogManager {
            source: self.source.clone(),
            state: self.state.clone(),
            query: Arc::clone(&self.query),
            page: Arc::clone(&self.page),
            limit: self.limit,
            searching: Arc::clone(&self.searching),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<S> CatalogManager<S>
where
    S: CarSource + Clone,
{
    pub fn new(source: S, state: CarsState, limit: u32) -> Self {
        CatalogManager {
            source,
            state,
            query: Arc::new(Mutex::new(String::new())),
            page: Arc::new(AtomicU32::new(1)),
            limit,
            searching: Arc::new(AtomicBool::new(false)),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> &CarsState {
        &self.state
    }

    pub fn search_text(&self) -> String {
        self.query.lock().expect("query lock poisoned").clone()
    }

    pub fn current_page(&self) -> u32 {
        self.page.load(Ordering::SeqCst)
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// True while a debounce timer is pending.
    pub fn is_searching(&self) -> bool {
        self.searching.load(Ordering::SeqCst)
    }

    /// Pages needed for the current total at this manager's page size.
    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.state.total(), self.limit)
    }

    /// Jumps straight to a text/page pair and fetches. This is the initial
    /// load and the one-shot CLI path. No debounce, no fade.
    pub async fn open(&self, text: &str, page: u32) {
        *self.query.lock().expect("query lock poisoned") = text.to_string();
        self.page.store(page.max(1), Ordering::SeqCst);
        self.fetch_current().await;
    }

    /// Records a keystroke: stores the text and re-arms the debounce timer.
    /// The fetch happens 1000ms after the LAST call, with the page reset
    /// to 1.
    pub fn handle_search(&self, text: &str) {
        *self.query.lock().expect("query lock poisoned") = text.to_string();
        self.searching.store(true, Ordering::SeqCst);

        let mut pending = self.pending.lock().expect("pending lock poisoned");
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let manager = self.clone();
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
            manager.page.store(1, Ordering::SeqCst);
            manager.searching.store(false, Ordering::SeqCst);
            manager.fetch_current().await;
        }));
    }

    /// Moves to `new_page` if the transition is valid; out-of-range and
    /// no-op targets are ignored like disabled pager arrows. Returns
    /// whether a fetch happened.
    pub async fn change_page(&self, new_page: u32) -> bool {
        let current = self.current_page();
        if !pagination::is_valid_transition(current, new_page, self.total_pages()) {
            return false;
        }

        // Fade-out before the swap. Cosmetic only.
        tokio::time::sleep(Duration::from_millis(PAGE_FADE_MS)).await;

        self.page.store(new_page, Ordering::SeqCst);
        self.fetch_current().await;
        true
    }

    /// Fetches whatever the current text and page say.
    pub async fn fetch_current(&self) {
        let model = self.search_text();
        let page = self.current_page();
        self.fetch(&model, page).await;
    }

    /// One guarded fetch: loading flag on, request, state replaced, loading
    /// flag off. A failed fetch leaves an empty page and a log line; the
    /// catalog never panics over the network.
    pub async fn fetch(&self, model: &str, page: u32) {
        self.state.begin_loading();

        let query = CarQuery {
            model: model.to_string(),
            page,
            limit: self.limit,
        };
        match self.source.fetch_page(&query).await {
            Ok(result) => {
                debug!(count = result.data.len(), total = result.total, page, "Catalog page loaded");
                self.state.set_page(result.data, result.total);
            }
            Err(e) => {
                error!(error = %e, "Failed to load cars");
                self.state.clear_page();
            }
        }

        self.state.end_loading();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rideline_api::ApiError;
    use rideline_core::Car;

    /// Records every fetch; answers with a fixed 12-car catalog.
    #[derive(Clone, Default)]
    struct RecordingSource {
        calls: Arc<Mutex<Vec<(String, u32)>>>,
    }

    #[async_trait]
    impl CarSource for RecordingSource {
        async fn fetch_page(&self, query: &CarQuery) -> ApiResult<CarPage> {
            self.calls
                .lock()
                .unwrap()
                .push((query.model.clone(), query.page));
            Ok(CarPage {
                data: vec![Car {
                    id: 1,
                    make: "Seat".into(),
                    model: "Ibiza".into(),
                    year: 2021,
                    features: vec![],
                }],
                total: 12,
                page: query.page,
                limit: query.limit,
            })
        }
    }

    #[derive(Clone, Default)]
    struct FailingSource;

    #[async_trait]
    impl CarSource for FailingSource {
        async fn fetch_page(&self, _query: &CarQuery) -> ApiResult<CarPage> {
            Err(ApiError::Rejected {
                status: 500,
                message: "boom".into(),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_then_cleared_fires_single_fetch() {
        let source = RecordingSource::default();
        let manager = CatalogManager::new(source.clone(), CarsState::new(), 6);

        // Type, then clear 400ms later, both inside the 1000ms window.
        manager.handle_search("ib");
        tokio::time::advance(Duration::from_millis(400)).await;
        manager.handle_search("");
        assert!(manager.is_searching());

        // Let the surviving timer fire.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        tokio::task::yield_now().await;

        let calls = source.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![(String::new(), 1)]);
        assert!(!manager.is_searching());
        assert_eq!(manager.current_page(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_typing_fires_per_pause() {
        let source = RecordingSource::default();
        let manager = CatalogManager::new(source.clone(), CarsState::new(), 6);

        manager.handle_search("i");
        tokio::time::sleep(Duration::from_millis(1100)).await;
        manager.handle_search("ib");
        tokio::time::sleep(Duration::from_millis(1100)).await;
        tokio::task::yield_now().await;

        let calls = source.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("i".to_string(), 1), ("ib".to_string(), 1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_change_page_fetches_valid_targets_only() {
        let source = RecordingSource::default();
        let manager = CatalogManager::new(source.clone(), CarsState::new(), 6);

        // Seed the total so total_pages() is 2.
        manager.fetch_current().await;
        assert_eq!(manager.total_pages(), 2);

        assert!(manager.change_page(2).await);
        assert_eq!(manager.current_page(), 2);

        // Same page, page 0 and out-of-range are all ignored.
        assert!(!manager.change_page(2).await);
        assert!(!manager.change_page(0).await);
        assert!(!manager.change_page(9).await);

        let calls = source.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], (String::new(), 2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_clears_page_and_loading_flag() {
        let manager = CatalogManager::new(FailingSource, CarsState::new(), 6);

        manager.fetch("", 1).await;

        let snapshot = manager.state().snapshot();
        assert!(snapshot.cars.is_empty());
        assert_eq!(snapshot.total, 0);
        assert!(!snapshot.loading);
    }
}
