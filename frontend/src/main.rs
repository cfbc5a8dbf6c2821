use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod cta {
    pub mod model;
    pub mod links;
    pub mod analytics;
    pub mod platform;
    pub mod store;
    pub mod contact_form;
    pub mod submit;
}
mod components {
    pub mod cta_button;
    pub mod countdown;
    pub mod cta_section;
    pub mod contact_modal;
    pub mod floating_whatsapp;
}
mod pages {
    pub mod home;
}

use components::{
    contact_modal::ContactModal,
    cta_button::CtaButton,
    floating_whatsapp::FloatingWhatsApp,
};
use cta::model::{CtaAction, CtaSize, CtaVariant, CONTACT_MODAL};
use cta::store::CtaProvider;
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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Página não encontrada"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Voltar para o início"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"PrimeCode Solutions"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#servicos" class="nav-link" onclick={close_menu.clone()}>{"Serviços"}</a>
                    <a href="#depoimentos" class="nav-link" onclick={close_menu.clone()}>{"Depoimentos"}</a>
                    <div onclick={close_menu}>
                        <CtaButton
                            id="nav-contact"
                            label="Fale Conosco"
                            action={CtaAction::OpenModal(AttrValue::Static(CONTACT_MODAL))}
                            section="nav"
                            variant={CtaVariant::Gradient}
                            size={CtaSize::Sm}
                        />
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <h3>{"PrimeCode Solutions"}</h3>
                    <p>{"Desenvolvimento de software, consultoria e suporte técnico."}</p>
                </div>
                <div class="footer-contact">
                    <a href={cta::links::tel_uri(config::CONTACT_PHONE)}>{config::CONTACT_PHONE}</a>
                </div>
            </div>
            <p class="footer-copy">{"© PrimeCode Solutions. Todos os direitos reservados."}</p>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CtaProvider>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <ContactModal />
                <FloatingWhatsApp />
            </CtaProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
