use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod content;
mod navigation;
mod reveal;
mod scroll;
mod components {
    pub mod action_link;
    pub mod fallback_image;
    pub mod footer;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod health_coaching;
    pub mod home;
    pub mod packages;
    pub mod psychosocial;
    pub mod retreats;
    pub mod testimonials;
}

use components::{
    action_link::{ActionLink, ActionVariant},
    footer::Footer,
};
use navigation::{use_scroll_to_top_on, NavAction, NavigationState, PageId};
use pages::{
    about::About,
    blog::Blog,
    contact::Contact,
    health_coaching::HealthCoaching,
    home::Home,
    packages::Packages,
    psychosocial::Psychosocial,
    retreats::Retreats,
    testimonials::Testimonials,
};
use scroll::use_scroll_state;

fn switch(page: PageId, on_navigate: Callback<PageId>) -> Html {
    match page {
        PageId::Home => {
            info!("Rendering Home page");
            html! { <Home on_navigate={on_navigate} /> }
        }
        PageId::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        PageId::HealthCoaching => {
            info!("Rendering Health Coaching page");
            html! { <HealthCoaching /> }
        }
        PageId::Psychosocial => {
            info!("Rendering Psychosocial page");
            html! { <Psychosocial /> }
        }
        PageId::Packages => {
            info!("Rendering Packages page");
            html! { <Packages /> }
        }
        PageId::Retreats => {
            info!("Rendering Retreats page");
            html! { <Retreats /> }
        }
        PageId::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        }
        PageId::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        PageId::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: PageId,
    pub menu_open: bool,
    pub scrolled: bool,
    pub on_navigate: Callback<PageId>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        current,
        menu_open,
        scrolled,
        on_navigate,
        on_toggle_menu,
        on_close_menu,
    } = props;

    let go_to = |page: PageId| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to(PageId::Home)}>
                    {config::SITE_NAME}
                </button>

                <div class="nav-links">
                    { for PageId::ALL.iter().map(|&page| html! {
                        <button
                            class={classes!("nav-link", (page == *current).then(|| "active"))}
                            onclick={go_to(page)}
                        >
                            {page.label()}
                        </button>
                    }) }
                </div>

                <div class="nav-action">
                    <ActionLink label="Get Started" class="compact" />
                </div>

                <button
                    class={classes!("burger-menu", menu_open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for PageId::ALL.iter().map(|&page| html! {
                                <button
                                    class={classes!("mobile-link", (page == *current).then(|| "active"))}
                                    onclick={go_to(page)}
                                >
                                    {page.label()}
                                </button>
                            }) }
                            <div onclick={close_menu}>
                                <ActionLink
                                    label="Get Started on WhatsApp"
                                    variant={ActionVariant::Primary}
                                    icon={true}
                                    class="full-width"
                                />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let navigation = use_reducer(NavigationState::default);
    let scroll = use_scroll_state();
    use_scroll_to_top_on(navigation.epoch);

    let on_navigate = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |page: PageId| dispatcher.dispatch(NavAction::NavigateTo(page)))
    };

    let on_toggle_menu = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let on_close_menu = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::CloseMenu))
    };

    html! {
        <div class="site">
            <Nav
                current={navigation.current}
                menu_open={navigation.menu_open}
                scrolled={scroll.scrolled_past_threshold}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
                on_close_menu={on_close_menu}
            />
            <main class="site-main">
                { switch(navigation.current, on_navigate) }
            </main>
            <Footer />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    background: #fdfcf8;
                    color: #1a4a3a;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                }
                h1, h2, h3 {
                    margin-top: 0;
                    color: #1a4a3a;
                }
                .site-main {
                    min-height: 100vh;
                }
                .page {
                    padding-top: 8rem;
                    animation: fade-in 0.7s ease;
                }
                .home-page {
                    padding-top: 0;
                }
                .full-height {
                    min-height: 100vh;
                }
                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .container.narrow {
                    max-width: 56rem;
                }
                .two-column {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .two-column.align-start {
                    align-items: start;
                }
                @media (min-width: 1024px) {
                    .two-column {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .page-intro {
                    padding-top: 2rem;
                    padding-bottom: 6rem;
                }
                .centered {
                    text-align: center;
                }
                .tinted-section {
                    padding: 6rem 1.5rem;
                    background: rgba(236, 253, 245, 0.3);
                }
                .section-title {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-title h1,
                .section-title h2 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                }
                .stack > * + * {
                    margin-top: 1.5rem;
                }
                .eyebrow {
                    display: block;
                    font-size: 0.65rem;
                    font-weight: 700;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .page h1 {
                    font-size: clamp(2.5rem, 5vw, 3.75rem);
                }
                .lead {
                    font-size: 1.1rem;
                    line-height: 1.7;
                    font-weight: 300;
                    color: rgba(26, 74, 58, 0.7);
                    margin-bottom: 1.5rem;
                }
                .card {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 2.5rem;
                    border: 1px solid #ecfdf5;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .card:hover {
                    box-shadow: 0 20px 25px rgba(26, 74, 58, 0.1);
                }
                .script-heading {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.5rem;
                    color: #065f46;
                    margin-bottom: 2rem;
                }
                .portrait { aspect-ratio: 4 / 5; }
                .rounded-md { border-radius: 1rem; }
                .rounded-lg { border-radius: 2rem; }
                .rounded-xl { border-radius: 3rem; }
                .square { aspect-ratio: 1 / 1; }
                .wide { aspect-ratio: 16 / 9; }
                .full-width { width: 100%; }

                .reveal {
                    will-change: opacity, transform;
                }

                .action-link {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    white-space: nowrap;
                    transition: all 0.3s ease;
                }
                .action-link:active {
                    transform: scale(0.95);
                }
                .action-link.primary {
                    background: #1a4a3a;
                    color: #ffffff;
                    box-shadow: 0 20px 25px rgba(26, 74, 58, 0.1);
                }
                .action-link.primary:hover {
                    background: #123328;
                }
                .action-link.secondary {
                    background: #ffffff;
                    color: #1a4a3a;
                }
                .action-link.secondary:hover {
                    background: #ecfdf5;
                }
                .action-link.outline,
                .outline-button {
                    background: transparent;
                    color: #1a4a3a;
                    border: 2px solid #1a4a3a;
                }
                .outline-button {
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .action-link.compact {
                    padding: 0.75rem 1.5rem;
                    font-size: 0.75rem;
                }

                .fallback-image {
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(236, 253, 245, 0.6);
                    border: 2px dashed rgba(26, 74, 58, 0.2);
                }
                .fallback-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .fallback-image:hover img {
                    transform: scale(1.05);
                }
                .fallback-image.failed {
                    background: rgba(236, 253, 245, 0.9);
                }
                .fallback-label {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    pointer-events: none;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(26, 74, 58, 0.1);
                    text-align: center;
                }
                .fallback-caption {
                    display: block;
                    font-size: 0.65rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(26, 74, 58, 0.5);
                }
                .fallback-name {
                    display: block;
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 0.85rem;
                    color: #1a4a3a;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 2rem 1.5rem;
                    background: transparent;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 1.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid #ecfdf5;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 1440px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #1a4a3a;
                    white-space: nowrap;
                }
                .nav-links {
                    display: none;
                    flex: 1;
                    justify-content: center;
                    gap: 2.5rem;
                }
                .nav-link {
                    position: relative;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(26, 74, 58, 0.4);
                    white-space: nowrap;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #1a4a3a;
                }
                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -0.5rem;
                    height: 2px;
                    border-radius: 999px;
                    background: #1a4a3a;
                }
                .nav-action {
                    display: none;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1a4a3a;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1.5rem;
                    background: #ffffff;
                    border-bottom: 1px solid #ecfdf5;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    max-height: 85vh;
                    overflow-y: auto;
                }
                .mobile-link {
                    text-align: left;
                    background: none;
                    border: none;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    font: inherit;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: rgba(26, 74, 58, 0.6);
                    cursor: pointer;
                }
                .mobile-link.active {
                    background: #ecfdf5;
                    color: #1a4a3a;
                }
                @media (min-width: 1280px) {
                    .nav-links,
                    .nav-action {
                        display: flex;
                    }
                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }

                .site-footer {
                    padding: 5rem 1.5rem;
                    border-top: 1px solid #ecfdf5;
                    text-align: center;
                }
                .footer-content h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .footer-tagline {
                    font-size: 0.875rem;
                    color: rgba(26, 74, 58, 0.4);
                    margin-bottom: 2rem;
                }
                .footer-rule {
                    height: 1px;
                    width: 6rem;
                    margin: 3rem auto 2rem;
                    background: rgba(209, 250, 229, 0.5);
                }
                .footer-copyright {
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(26, 74, 58, 0.3);
                }
                "#}
            </style>
        </div>
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
