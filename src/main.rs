use log::info;
use yew::prelude::*;

mod appointment;
mod config;
mod context;
mod error;
mod nav;
mod scroll;
mod theme;
mod visibility;
mod pages {
    pub mod landing;
}

use context::PageContext;
use nav::{MenuState, Nav};
use pages::landing::Landing;
use theme::Mode;

#[derive(Properties, PartialEq)]
struct AppProps {
    initial_mode: Mode,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let menu = use_reducer(MenuState::default);
    let initial_mode = props.initial_mode;
    let mode = use_state(move || initial_mode);
    let page = PageContext { menu, mode };

    html! {
        <ContextProvider<PageContext> context={page}>
            <Nav />
            <Landing />
        </ContextProvider<PageContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let mode = theme::init_theme();
    info!("Starting booking page in {}", mode.as_str());
    yew::Renderer::<App>::with_props(AppProps { initial_mode: mode }).render();
}
