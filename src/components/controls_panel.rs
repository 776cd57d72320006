use crate::config::{GRID_SIZE_MAX, GRID_SIZE_MIN};
use crate::model::GridSize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub lists: Vec<String>,
    pub selected: String,
    pub grid_size: GridSize,
    pub debug_mode: bool,
    pub can_submit: bool,
    pub on_select: Callback<String>,
    pub on_grid_size: Callback<GridSize>,
    pub on_debug: Callback<bool>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let select_cb = {
        let cb = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    // Out-of-range sizes are clamped; unparsable text restores the current size
    let size_cb = {
        let cb = props.on_grid_size.clone();
        let current = props.grid_size;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match GridSize::parse_input(&input.value()) {
                Some(size) => {
                    input.set_value(&size.get().to_string());
                    cb.emit(size);
                }
                None => input.set_value(&current.get().to_string()),
            }
        })
    };
    let debug_cb = {
        let cb = props.on_debug.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };
    let submit_cb = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {<form class="row controls" onsubmit={submit_cb} style="display:flex; gap:16px; align-items:center; flex-wrap:wrap;">
        <span>
            <label for="selected-list-input">{"Word List "}</label>
            <select id="selected-list-input" onchange={select_cb}>
                { for props.lists.iter().map(|opt| html!{
                    <option value={opt.clone()} selected={*opt == props.selected}>{ opt.clone() }</option>
                }) }
            </select>
        </span>
        <span>
            <label for="grid-size-input">{"Grid Size "}</label>
            <input
                id="grid-size-input"
                type="number"
                min={GRID_SIZE_MIN.to_string()}
                max={GRID_SIZE_MAX.to_string()}
                value={props.grid_size.get().to_string()}
                onchange={size_cb}
                placeholder="Enter a grid size"
            />
        </span>
        <span>
            <label for="use-debug-mode">{"Debug View"}</label>
            <input id="use-debug-mode" type="checkbox" checked={props.debug_mode} onchange={debug_cb} />
        </span>
        <button type="submit" disabled={!props.can_submit}>{"Get Grid"}</button>
    </form>}
}
