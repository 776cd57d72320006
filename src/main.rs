mod components;
mod config;
mod error;
mod model;
mod service;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
