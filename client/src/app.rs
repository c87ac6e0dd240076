//! Root application component with routing and context providers.

use correction::PanelState;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the client configuration once and provides it, together with the
/// panel state, to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::from_build_env());
    provide_context(RwSignal::new(PanelState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/spellfix.css"/>
        <Title text="Spelling Correction"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
