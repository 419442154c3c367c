//! # List Controller
//!
//! Drives the Home screen: an append-only collection of summaries and a page
//! cursor that moves forward whenever the viewer nears the end of the list.
//!
//! ```text
//! mount() ──► page 0 ──► load_page() ──► apply_page() ──► items += batch
//!                 ▲                                            │
//!                 └──────────── end_reached() ◄────────────────┘
//! ```
//!
//! Two optional guards sit on top of the plain accumulate-everything
//! behaviour (see [`ListOptions`]):
//! - `guard_in_flight`: a page is requested at most once, and the cursor
//!   holds still while a request is outstanding.
//! - `dedupe`: summaries whose id is already listed are skipped.

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::api::{DexApi, NamedResource, PageResponse, fetch_as};
use crate::core::format::id_from_url;
use crate::core::types::{FetchError, PokemonSummary};

pub const DEFAULT_PAGE_SIZE: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page_size: u32,
    pub guard_in_flight: bool,
    pub dedupe: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            guard_in_flight: true,
            dedupe: true,
        }
    }
}

impl ListOptions {
    /// Accumulate every batch as it arrives, duplicates and all.
    pub fn unguarded(page_size: u32) -> Self {
        Self {
            page_size,
            guard_in_flight: false,
            dedupe: false,
        }
    }
}
/// Item offset of `page`, computed in `u64`.
/// Item offset of `page`. Widened so large page sizes cannot overflow.
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page) * u64::from(page_size)
}

/// Relative path for one page window.
pub fn page_path(page: u32, page_size: u32) -> String {
    format!("pokemon?offset={}&limit={}", page_offset(page, page_size), page_size)
}

/// Turns one raw list entry into a summary, deriving its id from the URL.
pub fn summarize(resource: NamedResource) -> Result<PokemonSummary, FetchError> {
    let id = id_from_url(&resource.url)
        .ok_or_else(|| FetchError::Lookup(format!("no id segment in url {:?}", resource.url)))?
        .to_string();
    Ok(PokemonSummary {
        id,
        name: resource.name,
        url: resource.url,
    })
}

/// Fetches one page window and maps every result to a [`PokemonSummary`].
pub async fn load_page(
    api: &dyn DexApi,
    page: u32,
    page_size: u32,
) -> Result<Vec<PokemonSummary>, FetchError> {
    let path = page_path(page, page_size);
    let response: PageResponse = fetch_as(api, &path).await?;
    debug!("Page {} returned {} results", page, response.results.len());
    response.results.into_iter().map(summarize).collect()
}

pub struct ListController {
    items: Vec<PokemonSummary>,
    page: u32,
    options: ListOptions,
    /// Outstanding request count per page.
    pending: HashMap<u32, usize>,
    loaded: HashSet<u32>,
    seen: HashSet<String>,
    last_error: Option<FetchError>,
}

impl ListController {
    pub fn new(options: ListOptions) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            options,
            pending: HashMap::new(),
            loaded: HashSet::new(),
            seen: HashSet::new(),
            last_error: None,
        }
    }

    pub fn items(&self) -> &[PokemonSummary] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn options(&self) -> ListOptions {
        self.options
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// First load when the screen opens. Returns the page to fetch.
    pub fn mount(&mut self) -> Option<u32> {
        self.begin_page(self.page)
    }

    /// The viewer reached the end of the list: advance the cursor and return
    /// the page to fetch, if any.
    pub fn end_reached(&mut self) -> Option<u32> {
        if self.options.guard_in_flight && self.is_loading() {
            debug!("End reached while page(s) {:?} in flight; holding cursor", self.pending);
            return None;
        }
        self.page += 1;
        self.begin_page(self.page)
    }

    /// Marks `page` as requested. With the in-flight guard on, a page that is
    /// already pending or loaded is not requested again.
    pub fn begin_page(&mut self, page: u32) -> Option<u32> {
        if self.options.guard_in_flight
            && (self.pending.contains_key(&page) || self.loaded.contains(&page))
        {
            debug!("Page {} already requested, skipping", page);
            return None;
        }
        *self.pending.entry(page).or_insert(0) += 1;
        info!(
            "Requesting page {} (offset {})",
            page,
            page_offset(page, self.options.page_size)
        );
        Some(page)
    }

    /// Applies a page result. Successful batches are appended after whatever
    /// is already held; failures leave the list as it was.
    ///
    /// Returns the number of summaries appended.
    pub fn apply_page(
        &mut self,
        page: u32,
        result: Result<Vec<PokemonSummary>, FetchError>,
    ) -> usize {
        if let Some(outstanding) = self.pending.get_mut(&page) {
            *outstanding -= 1;
            if *outstanding == 0 {
                self.pending.remove(&page);
            }
        }
        match result {
            Ok(batch) => {
                self.loaded.insert(page);
                self.last_error = None;
                let before = self.items.len();
                for summary in batch {
                    if self.options.dedupe && !self.seen.insert(summary.id.clone()) {
                        debug!("Dropping duplicate summary id {}", summary.id);
                        continue;
                    }
                    self.items.push(summary);
                }
                let appended = self.items.len() - before;
                info!("Page {} appended {} summaries ({} total)", page, appended, self.items.len());
                appended
            }
            Err(e) => {
                warn!("Page {} failed: {}", page, e);
                self.last_error = Some(e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::{StubApi, page_body};

    fn summary(name: &str, id: u32) -> PokemonSummary {
        PokemonSummary {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
        }
    }

    #[test]
    fn test_page_path_uses_offset_window() {
        assert_eq!(page_path(0, 40), "pokemon?offset=0&limit=40");
        assert_eq!(page_path(3, 40), "pokemon?offset=120&limit=40");
    }

    #[test]
    fn test_page_path_large_page_size_does_not_overflow() {
        assert_eq!(
            page_path(2, 3_000_000_000),
            "pokemon?offset=6000000000&limit=3000000000"
        );
        assert_eq!(page_offset(u32::MAX, u32::MAX), 18_446_744_065_119_617_025);
    }

    #[test]
    fn test_repeat_request_keeps_loading_until_both_resolve() {
        let mut list = ListController::new(ListOptions::unguarded(40));
        assert_eq!(list.mount(), Some(0));
        assert_eq!(list.begin_page(0), Some(0));

        list.apply_page(0, Ok(vec![summary("bulbasaur", 1)]));
        assert!(list.is_loading());

        list.apply_page(0, Ok(vec![summary("bulbasaur", 1)]));
        assert!(!list.is_loading());
    }

    #[tokio::test]
    async fn test_load_page_derives_ids() {
        let api = StubApi::new().with(
            "pokemon?offset=0&limit=40",
            page_body(&[("bulbasaur", 1), ("ivysaur", 2)]),
        );
        let batch = load_page(&api, 0, 40).await.unwrap();
        assert_eq!(batch[0], summary("bulbasaur", 1));
        assert_eq!(batch[1].id, "2");
        assert_eq!(api.calls(), vec!["pokemon?offset=0&limit=40"]);
    }

    #[tokio::test]
    async fn test_load_page_surfaces_transport_failure() {
        let api = StubApi::new().with_error(
            "pokemon?offset=40&limit=40",
            ApiError::Network("connection reset".to_string()),
        );
        let result = load_page(&api, 1, 40).await;
        assert!(matches!(result, Err(FetchError::Transport(ApiError::Network(_)))));
    }

    #[test]
    fn test_load_page_blocking_entry_point() {
        let api = StubApi::new().with("pokemon?offset=0&limit=2", page_body(&[("a", 1), ("b", 2)]));
        let batch = tokio_test::block_on(load_page(&api, 0, 2)).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_mount_requests_page_zero() {
        let mut list = ListController::new(ListOptions::default());
        assert_eq!(list.mount(), Some(0));
        assert!(list.is_loading());
    }

    #[test]
    fn test_apply_page_appends_without_reordering() {
        let mut list = ListController::new(ListOptions::unguarded(2));
        list.mount();
        list.apply_page(0, Ok(vec![summary("bulbasaur", 1), summary("ivysaur", 2)]));
        let first_page: Vec<PokemonSummary> = list.items().to_vec();

        assert_eq!(list.end_reached(), Some(1));
        list.apply_page(1, Ok(vec![summary("venusaur", 3), summary("charmander", 4)]));

        assert_eq!(&list.items()[..2], first_page.as_slice());
        assert_eq!(list.items()[2].name, "venusaur");
        assert_eq!(list.items().len(), 4);
    }

    #[test]
    fn test_failed_page_keeps_previous_items() {
        let mut list = ListController::new(ListOptions::default());
        list.mount();
        list.apply_page(0, Ok(vec![summary("bulbasaur", 1)]));
        list.end_reached();
        let appended = list.apply_page(
            1,
            Err(FetchError::Transport(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            })),
        );
        assert_eq!(appended, 0);
        assert_eq!(list.items().len(), 1);
        assert!(list.last_error().is_some());
        assert!(!list.is_loading());
    }

    #[test]
    fn test_unguarded_list_keeps_duplicates() {
        let mut list = ListController::new(ListOptions::unguarded(40));
        assert_eq!(list.mount(), Some(0));
        // A second request for the same page goes out before the first resolves.
        assert_eq!(list.begin_page(0), Some(0));
        list.apply_page(0, Ok(vec![summary("bulbasaur", 1)]));
        list.apply_page(0, Ok(vec![summary("bulbasaur", 1)]));
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[0], list.items()[1]);
    }

    #[test]
    fn test_in_flight_guard_blocks_repeat_requests() {
        let mut list = ListController::new(ListOptions::default());
        assert_eq!(list.mount(), Some(0));
        assert_eq!(list.begin_page(0), None);
        // Rapid end-reached signals while page 0 is pending do not move the cursor.
        assert_eq!(list.end_reached(), None);
        assert_eq!(list.page(), 0);

        list.apply_page(0, Ok(vec![summary("bulbasaur", 1)]));
        assert_eq!(list.begin_page(0), None);
        assert_eq!(list.end_reached(), Some(1));
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_unguarded_cursor_advances_per_signal() {
        let mut list = ListController::new(ListOptions::unguarded(40));
        list.mount();
        assert_eq!(list.end_reached(), Some(1));
        assert_eq!(list.end_reached(), Some(2));
        assert_eq!(list.page(), 2);
    }

    #[test]
    fn test_dedupe_drops_overlapping_ids() {
        let mut list = ListController::new(ListOptions::default());
        list.mount();
        list.apply_page(0, Ok(vec![summary("bulbasaur", 1), summary("ivysaur", 2)]));
        list.end_reached();
        let appended =
            list.apply_page(1, Ok(vec![summary("ivysaur", 2), summary("venusaur", 3)]));
        assert_eq!(appended, 1);
        let ids: Vec<&str> = list.items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_summarize_rejects_url_without_segments() {
        let result = summarize(NamedResource {
            name: "missingno".to_string(),
            url: "missingno".to_string(),
        });
        assert!(matches!(result, Err(FetchError::Lookup(_))));
    }
}
