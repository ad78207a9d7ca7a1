use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use shared::StageCatalog;
use crate::auth::AuthProvider;
use crate::components::nav::Nav;
use crate::components::footer::Footer;
use crate::config::Config;

pub mod auth;
pub mod components;
pub mod config;
pub mod head;
pub mod pages {
    pub mod analytics;
    pub mod config_error;
    pub mod not_found;
    pub mod sign_in;
    pub mod verification;
}

use pages::config_error::{config_error_message, ConfigError, ConfigErrorProps};
use pages::{analytics::Analytics, not_found::NotFound, sign_in::SignIn, verification::VerificationPage};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-in")]
    SignIn,
    #[at("/analytics")]
    Analytics,
    #[at("/verification")]
    Verification,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<StageCatalog>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    debug!("App component rendering");
    html! {
        <ContextProvider<Rc<StageCatalog>> context={props.catalog.clone()}>
            <AuthProvider>
                <BrowserRouter>
                    <div class="app-container">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </AuthProvider>
        </ContextProvider<Rc<StageCatalog>>>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Analytics} /> },
        Route::SignIn => html! { <SignIn /> },
        Route::Analytics => html! { <Analytics /> },
        Route::Verification => html! { <VerificationPage /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Initializing {}...", Config::APP_NAME);

    let catalog = match StageCatalog::reference() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Invalid stage catalog: {}", e);
            yew::Renderer::<ConfigError>::with_props(ConfigErrorProps {
                message: config_error_message(&e).into(),
            })
            .render();
            return Err(JsValue::from_str(&e.to_string()));
        }
    };

    info!("Mounting application");
    yew::Renderer::<App>::with_props(AppProps {
        catalog: Rc::new(catalog),
    })
    .render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
