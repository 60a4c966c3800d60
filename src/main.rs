use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod animation;
mod calculator;
mod config;
mod debounce;
mod diagnostics;
mod dom;
mod hooks;
mod telemetry;
mod pages {
    pub mod landing;
}
mod components {
    pub mod anchor;
    pub mod fee_calculator;
    pub mod header;
    pub mod lazy_image;
    pub mod reveal;
    pub mod ripple;
    pub mod showcase;
}

use components::{header::Header, ripple::RIPPLE_CSS};
use diagnostics::use_page_diagnostics;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    use_page_diagnostics();

    html! {
        <BrowserRouter>
            <style>{ RIPPLE_CSS }</style>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting ZeroPesa landing page");
    yew::Renderer::<App>::new().render();

    match diagnostics::initialized_event() {
        Ok(event) => telemetry::track(&event),
        Err(e) => log::warn!("Could not describe environment: {}", e),
    }
}
