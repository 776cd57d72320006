use std::rc::Rc;
use yew::Reducible;

use crate::error::ViewerError;
use crate::model::{Configuration, EMPTY_PUZZLE, GridSize, Puzzle, WordListCatalog};
use crate::util::{clog, cwarn};

use super::render::{RenderModel, build_render_model};

/// Identifies one grid request. Later requests compare greater.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Hands out monotonically increasing request ids.
#[derive(Debug, Default)]
pub struct RequestTicker(u64);

impl RequestTicker {
    pub fn issue(&mut self) -> RequestId {
        self.0 += 1;
        RequestId(self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse {
        request: RequestId,
    },
}

/// Everything the grid service needs for one request, captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub word_list_id: String,
    pub grid_size: GridSize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub configuration: Configuration,
    pub catalog: WordListCatalog,
    pub puzzle: Puzzle,
    pub phase: Phase,
    /// Most recent failure, cleared by the next successful response.
    pub last_error: Option<ViewerError>,
}

impl SessionState {
    pub fn set_word_list(&mut self, id: impl Into<String>) {
        self.configuration.word_list_id = id.into();
    }

    /// Also drops the current puzzle and supersedes any in-flight request,
    /// so a grid built for the old size is never paired with the new one.
    pub fn set_grid_size(&mut self, size: GridSize) {
        if self.configuration.grid_size == size {
            return;
        }
        self.configuration.grid_size = size;
        self.puzzle = EMPTY_PUZZLE;
        if let Phase::AwaitingResponse { request } = self.phase {
            clog(&format!("grid size changed, superseding request {request:?}"));
            self.phase = Phase::Idle;
        }
    }

    pub fn set_debug_mode(&mut self, on: bool) {
        self.configuration.debug_mode = on;
    }

    pub fn can_submit(&self) -> bool {
        self.configuration.can_submit()
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse { .. })
    }

    /// Snapshot of the configuration for a new request, or `None` if submission is disabled.
    pub fn request_for(&self, id: RequestId) -> Option<FetchRequest> {
        self.can_submit().then(|| FetchRequest {
            id,
            word_list_id: self.configuration.word_list_id.clone(),
            grid_size: self.configuration.grid_size,
        })
    }

    pub fn render_model(&self) -> RenderModel {
        build_render_model(
            &self.puzzle,
            self.configuration.debug_mode,
            self.configuration.grid_size,
        )
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    SelectWordList(String),
    SetGridSize(GridSize),
    SetDebugMode(bool),
    CatalogLoaded(Result<Vec<String>, ViewerError>),
    RequestStarted(FetchRequest),
    RequestResolved {
        request: RequestId,
        result: Result<Puzzle, ViewerError>,
    },
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            SelectWordList(id) => new.set_word_list(id),
            SetGridSize(size) => new.set_grid_size(size),
            SetDebugMode(on) => new.set_debug_mode(on),
            CatalogLoaded(result) => {
                if !new.catalog.is_empty() {
                    return self;
                }
                match result {
                    Ok(lists) => {
                        clog(&format!("loaded {} word lists", lists.len()));
                        new.catalog.available_lists = lists;
                        if new.configuration.word_list_id.is_empty() {
                            if let Some(first) = new.catalog.first() {
                                new.configuration.word_list_id = first.to_string();
                            }
                        }
                    }
                    Err(e) => {
                        cwarn(&e.to_string());
                        new.last_error = Some(e);
                    }
                }
            }
            RequestStarted(request) => {
                if !new.can_submit() {
                    return self;
                }
                clog(&format!(
                    "request {:?}: list={} size={}",
                    request.id,
                    request.word_list_id,
                    request.grid_size.get()
                ));
                new.phase = Phase::AwaitingResponse {
                    request: request.id,
                };
            }
            RequestResolved { request, result } => {
                if new.phase != (Phase::AwaitingResponse { request }) {
                    clog(&format!("ignoring stale response for {request:?}"));
                    return self;
                }
                new.phase = Phase::Idle;
                match result {
                    Ok(puzzle) => {
                        clog(&format!(
                            "request {request:?}: {} words, {} cells",
                            puzzle.words.len(),
                            puzzle.grid.len()
                        ));
                        new.puzzle = puzzle;
                        new.last_error = None;
                    }
                    Err(e) => {
                        cwarn(&format!("request {request:?}: {e}"));
                        new.last_error = Some(e);
                    }
                }
            }
        }
        Rc::new(new)
    }
}
