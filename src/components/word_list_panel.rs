use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WordListPanelProps {
    /// Selected list id, shown in the heading.
    pub title: String,
    pub words: Vec<String>,
}

#[function_component]
pub fn WordListPanel(props: &WordListPanelProps) -> Html {
    html! {<div>
        <h2>{ format!("Words: {}", props.title) }</h2>
        <div class="word-list">
            { for props.words.iter().map(|w| html!{ <div>{ w.clone() }</div> }) }
        </div>
    </div>}
}
