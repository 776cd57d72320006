use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLineProps {
    pub awaiting: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component]
pub fn StatusLine(props: &StatusLineProps) -> Html {
    let row_style = "min-height:18px; font-size:13px;";
    if props.awaiting {
        return html! { <div style={row_style}>{"Loading…"}</div> };
    }
    match &props.error {
        Some(msg) => html! { <div style={format!("{} color:#f85149;", row_style)}>{ msg.clone() }</div> },
        None => html! { <div style={row_style}></div> },
    }
}
