mod api;
mod components;
mod hooks;
mod pages;
mod session;
pub mod utils;

use hooks::AppContext;
use pages::{home::HomePage, login::LoginPage};
use session::BrowserTokenStore;
use shared::Session;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/home")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <HomePage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(utils::app_config);
    // Token presence is read once here; pages get it through the context
    let session = {
        let key = config.token_key.clone();
        use_state(move || Session::restore(&BrowserTokenStore, &key))
    };

    let set_session = {
        let session = session.clone();
        Callback::from(move |next: Session| session.set(next))
    };

    let context = AppContext {
        config: (*config).clone(),
        session: (*session).clone(),
        set_session,
    };

    html! {
        <ContextProvider<AppContext> {context}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
