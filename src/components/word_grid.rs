use crate::config::ViewerSettings;
use crate::state::CellDescriptor;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WordGridProps {
    pub cells: Vec<CellDescriptor>,
    pub columns: u32,
    pub rows: u32,
}

/// Lays the cells out row-major on a `columns × rows` CSS grid. Fewer cells
/// than slots (stale data) simply leaves the tail empty.
#[function_component(WordGrid)]
pub fn word_grid(props: &WordGridProps) -> Html {
    let settings = use_context::<ViewerSettings>().unwrap_or_default();
    let track = format!("{}px ", settings.cell_px);
    let container_style = format!(
        "display:grid; grid-template-columns:{}; grid-template-rows:{};",
        track.repeat(props.columns as usize),
        track.repeat(props.rows as usize)
    );

    html! {<div class="grid-container" style={container_style}>
        { for props.cells.iter().enumerate().map(|(i, cell)| {
            let style = format!(
                "display:flex; align-items:center; justify-content:center; background:{};",
                settings.cell_background(cell.highlighted)
            );
            html!{ <div key={i} class="word-grid-item" {style}><span>{ cell.character.clone() }</span></div> }
        }) }
    </div>}
}
