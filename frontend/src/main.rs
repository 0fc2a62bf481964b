use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod registration;
mod components {
    pub mod icon;
    pub mod registration_form;
    pub mod toast;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use components::registration_form::RegistrationContext;
use components::toast::{ToastHandle, ToastList, ToastViewport};
use content::WebinarContent;
use pages::{
    landing::Landing,
    legal::{NotFound, PrivacyPolicy, TermsOfService},
};
use registration::RegistrationTracker;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
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
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let loaded = use_memo(
        |_| {
            WebinarContent::load().map(Rc::new).map_err(|err| {
                error!("Webinar content is invalid: {}", err);
                err
            })
        },
        (),
    );
    // One tracker for the whole session so both form placements agree.
    let tracker = use_state(RegistrationTracker::new);
    let toasts = use_reducer(ToastList::default);

    let content = match &*loaded {
        Ok(content) => content.clone(),
        Err(err) => {
            return html! {
                <div class="content-error">
                    <h1>{"Something went wrong"}</h1>
                    <p>{ err.to_string() }</p>
                </div>
            };
        }
    };

    html! {
        <ContextProvider<Rc<WebinarContent>> context={content}>
            <ContextProvider<ToastHandle> context={ToastHandle::new(toasts)}>
                <ContextProvider<RegistrationContext> context={RegistrationContext { tracker }}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                    <ToastViewport />
                </ContextProvider<RegistrationContext>>
            </ContextProvider<ToastHandle>>
        </ContextProvider<Rc<WebinarContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
