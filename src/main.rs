use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod clipboard;
mod config;
mod content;
mod timer;
mod quote {
    pub mod controller;
    pub mod lifecycle;
    pub mod model;
    pub mod submitter;
}
mod components {
    pub mod anchor;
    pub mod carousel_controls;
    pub mod fleet;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod partners;
    pub mod quote_form;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, header::Header};
use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="hero-cta">
                        {"Back to the home page"}
                    </Link<Route>>
                </main>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
