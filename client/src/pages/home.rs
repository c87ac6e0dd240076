//! The single spelling-correction page.

use leptos::prelude::*;

use crate::components::correction_panel::CorrectionPanel;
use crate::components::notice_banner::NoticeBanner;
use crate::config::AppConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<AppConfig>().theme;

    view! {
        <div class="app-container" style=theme.style_vars()>
            <main class="main-paper">
                <header class="header">
                    <span class="header__icon" aria-hidden="true">"✓"</span>
                    <h1 class="title">"Spelling Correction"</h1>
                </header>
                <NoticeBanner/>
                <CorrectionPanel/>
            </main>
        </div>
    }
}
