//! The grid service seam: catalog loading and puzzle fetching.
//!
//! [`GridService`] is the raw request/response channel to the generator;
//! [`load_catalog`] and [`fetch_puzzle`] turn its answers into the viewer's
//! error taxonomy and enforce the request preconditions.

pub mod tauri;

pub use tauri::TauriGridService;

use crate::error::{Result, ViewerError};
use crate::model::{GridSize, Puzzle};
use crate::state::FetchRequest;

#[allow(async_fn_in_trait)]
pub trait GridService {
    async fn word_list_options(&self) -> std::result::Result<Vec<String>, String>;
    async fn grid(&self, list: &str, size: u32) -> std::result::Result<Puzzle, String>;
}

/// Fetch the word-list catalog. An empty catalog counts as a failure.
pub async fn load_catalog<S: GridService>(service: &S) -> Result<Vec<String>> {
    let lists = service
        .word_list_options()
        .await
        .map_err(ViewerError::CatalogLoadFailed)?;
    if lists.is_empty() {
        return Err(ViewerError::CatalogLoadFailed(
            "service returned no word lists".to_string(),
        ));
    }
    Ok(lists)
}

/// Request a puzzle for `request`. A response whose grid does not hold
/// exactly `size * size` cells is rejected.
pub async fn fetch_puzzle<S: GridService>(service: &S, request: &FetchRequest) -> Result<Puzzle> {
    if request.word_list_id.is_empty() {
        return Err(ViewerError::InvalidConfiguration(
            "no word list selected".to_string(),
        ));
    }
    let size = GridSize::new(request.grid_size.get())?;
    let puzzle = service
        .grid(&request.word_list_id, size.get())
        .await
        .map_err(ViewerError::RequestFailed)?;
    if !puzzle.fits(size) {
        return Err(ViewerError::RequestFailed(format!(
            "expected {} cells, got {}",
            size.cell_count(),
            puzzle.grid.len()
        )));
    }
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestTicker;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Builds grids of the requested size; knows a fixed set of lists.
    struct FakeService {
        lists: Vec<String>,
        offline: bool,
        short_by: usize,
        calls: Cell<usize>,
    }

    impl FakeService {
        fn new(lists: &[&str]) -> Self {
            Self {
                lists: lists.iter().map(|s| s.to_string()).collect(),
                offline: false,
                short_by: 0,
                calls: Cell::new(0),
            }
        }
    }

    impl GridService for FakeService {
        async fn word_list_options(&self) -> std::result::Result<Vec<String>, String> {
            if self.offline {
                return Err("connection refused".into());
            }
            Ok(self.lists.clone())
        }

        async fn grid(&self, list: &str, size: u32) -> std::result::Result<Puzzle, String> {
            self.calls.set(self.calls.get() + 1);
            if self.offline {
                return Err("connection refused".into());
            }
            if !self.lists.iter().any(|l| l == list) {
                return Err(format!("unknown variant `{list}`"));
            }
            let cells = (size * size) as usize - self.short_by;
            Ok(Puzzle {
                words: vec!["CAT".into(), "DOG".into()],
                grid: vec!["x".to_string(); cells],
            })
        }
    }

    fn request(list: &str, side: u32) -> FetchRequest {
        FetchRequest {
            id: RequestTicker::default().issue(),
            word_list_id: list.to_string(),
            grid_size: GridSize::new(side).unwrap(),
        }
    }

    #[test]
    fn catalog_is_returned_in_order() {
        let svc = FakeService::new(&["EarlyPrimary", "Advanced"]);
        let lists = block_on(load_catalog(&svc)).unwrap();
        assert_eq!(lists, vec!["EarlyPrimary", "Advanced"]);
    }

    #[test]
    fn empty_or_failed_catalog_is_an_error() {
        let svc = FakeService::new(&[]);
        assert!(matches!(
            block_on(load_catalog(&svc)),
            Err(ViewerError::CatalogLoadFailed(_))
        ));

        let mut svc = FakeService::new(&["EarlyPrimary"]);
        svc.offline = true;
        assert_eq!(
            block_on(load_catalog(&svc)),
            Err(ViewerError::CatalogLoadFailed("connection refused".into()))
        );
    }

    #[test]
    fn fetch_returns_full_grid() {
        let svc = FakeService::new(&["EarlyPrimary"]);
        for side in [5, 12, 20] {
            let puzzle = block_on(fetch_puzzle(&svc, &request("EarlyPrimary", side))).unwrap();
            assert_eq!(puzzle.grid.len(), (side * side) as usize);
            assert_eq!(puzzle.words.len(), 2);
        }
    }

    #[test]
    fn empty_selection_never_reaches_the_service() {
        let svc = FakeService::new(&["EarlyPrimary"]);
        let err = block_on(fetch_puzzle(&svc, &request("", 12))).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidConfiguration(_)));
        assert_eq!(svc.calls.get(), 0);
    }

    #[test]
    fn unknown_list_fails_the_request() {
        let svc = FakeService::new(&["EarlyPrimary"]);
        let err = block_on(fetch_puzzle(&svc, &request("Nonexistent", 12))).unwrap_err();
        assert_eq!(
            err,
            ViewerError::RequestFailed("unknown variant `Nonexistent`".into())
        );
    }

    #[test]
    fn transport_failure_fails_the_request() {
        let mut svc = FakeService::new(&["EarlyPrimary"]);
        svc.offline = true;
        let err = block_on(fetch_puzzle(&svc, &request("EarlyPrimary", 12))).unwrap_err();
        assert!(matches!(err, ViewerError::RequestFailed(_)));
    }

    #[test]
    fn short_grid_is_rejected() {
        let mut svc = FakeService::new(&["EarlyPrimary"]);
        svc.short_by = 1;
        let err = block_on(fetch_puzzle(&svc, &request("EarlyPrimary", 8))).unwrap_err();
        assert_eq!(
            err,
            ViewerError::RequestFailed("expected 64 cells, got 63".into())
        );
    }
}
