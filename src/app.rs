mod background;
mod browser;
mod footer;
mod header;
mod homepage;
mod resume;
mod splash;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::compose::{compose, PageModel, Screen};
use crate::config::ViewConfig;
use crate::content::PORTFOLIO;
use crate::session::Session;
use crate::view_state::ViewState;

use background::{Background, Cursor};
use browser::BrowserHost;
use footer::Footer;
use header::NavBar;
use homepage::{About, Contact, Hero};
use resume::{Projects, Skills, Timeline};
use splash::Splash;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/dev-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Developer Portfolio - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Owns the view state for one mounted page and shows the splash until the
/// boot timer fires.
#[component]
fn PortfolioPage() -> impl IntoView {
    let config = ViewConfig::default();
    let state = RwSignal::new(ViewState::default());

    // effects only run in the browser, so the server always renders the splash
    Effect::new(move |_| {
        let session = Session::start(&BrowserHost, state, &config);
        on_cleanup(move || {
            let mut session = session;
            session.teardown();
        });
    });

    let boot = Memo::new(move |_| state.with(|s| s.boot));
    let year = chrono::Local::now().year();

    view! {
        <Title text="Home" />
        {move || {
            boot.track();
            let snapshot = state.get_untracked();
            let mut rng = rand::thread_rng();
            match compose(&snapshot, &PORTFOLIO, year, config.particle_count, &mut rng) {
                Screen::Splash => view! { <Splash /> }.into_any(),
                Screen::Page(page) => view! { <Page page state /> }.into_any(),
            }
        }}
    }
}

#[component]
fn Page(page: PageModel, state: RwSignal<ViewState>) -> impl IntoView {
    let active = Memo::new(move |_| state.with(|s| s.active_section));
    let pointer = Memo::new(move |_| state.with(|s| s.pointer));
    let profile = &PORTFOLIO.profile;
    let PageModel {
        particles,
        skills,
        projects,
        timeline,
        copyright,
    } = page;

    view! {
        <div class="app relative min-h-screen overflow-x-hidden">
            <Background particles />
            <Cursor pointer />
            <NavBar active />
            <main class="flex flex-col mx-auto w-full max-w-6xl px-4">
                <Hero profile />
                <About profile />
                <Skills bars=skills />
                <Projects cards=projects />
                <Timeline entries=timeline />
                <Contact profile />
            </main>
            <Footer copyright />
        </div>
    }
}
