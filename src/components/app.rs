use super::{
    controls_panel::ControlsPanel, status_line::StatusLine, word_grid::WordGrid,
    word_list_panel::WordListPanel,
};
use crate::config::ViewerSettings;
use crate::model::GridSize;
use crate::service::{TauriGridService, fetch_puzzle, load_catalog};
use crate::state::{RequestTicker, SessionAction, SessionState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Display settings reach the grid through context
#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionState::default);
    let ticker = use_mut_ref(RequestTicker::default);
    let settings = use_memo((), |_| ViewerSettings::load());

    // Load the catalog once
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = load_catalog(&TauriGridService).await;
                session.dispatch(SessionAction::CatalogLoaded(result));
            });
            || ()
        });
    }

    let on_select = {
        let session = session.clone();
        Callback::from(move |id: String| session.dispatch(SessionAction::SelectWordList(id)))
    };
    let on_grid_size = {
        let session = session.clone();
        Callback::from(move |size: GridSize| session.dispatch(SessionAction::SetGridSize(size)))
    };
    let on_debug = {
        let session = session.clone();
        Callback::from(move |on: bool| session.dispatch(SessionAction::SetDebugMode(on)))
    };
    let on_submit = {
        let session = session.clone();
        let ticker = ticker.clone();
        Callback::from(move |_| {
            let Some(request) = session.request_for(ticker.borrow_mut().issue()) else {
                return;
            };
            session.dispatch(SessionAction::RequestStarted(request.clone()));
            let session = session.clone();
            spawn_local(async move {
                let result = fetch_puzzle(&TauriGridService, &request).await;
                session.dispatch(SessionAction::RequestResolved {
                    request: request.id,
                    result,
                });
            });
        })
    };

    let model = session.render_model();
    let config = &session.configuration;

    html! {
        <ContextProvider<ViewerSettings> context={(*settings).clone()}>
            <div class="container">
                <ControlsPanel
                    lists={session.catalog.available_lists.clone()}
                    selected={config.word_list_id.clone()}
                    grid_size={config.grid_size}
                    debug_mode={config.debug_mode}
                    can_submit={session.can_submit()}
                    {on_select}
                    {on_grid_size}
                    {on_debug}
                    {on_submit}
                />
                <StatusLine awaiting={session.is_awaiting()} error={session.last_error.as_ref().map(|e| e.to_string())} />
                <WordGrid cells={model.cells} columns={model.columns} rows={model.rows} />
                <WordListPanel title={config.word_list_id.clone()} words={model.words} />
            </div>
        </ContextProvider<ViewerSettings>>
    }
}
