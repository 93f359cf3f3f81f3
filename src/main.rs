use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod dom;
mod motion;
mod scroll;
mod icons;
mod content;
mod constellation;
mod marquee;
mod hooks;
mod components {
    pub mod nav;
    pub mod scroll_progress;
    pub mod hero;
    pub mod features;
    pub mod tech_stack;
    pub mod testimonials;
    pub mod try_it;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

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
            info!("Unknown path, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
