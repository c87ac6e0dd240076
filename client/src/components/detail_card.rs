//! Diagnostic breakdown shown under the corrected text.

use correction::DetailView;
use leptos::prelude::*;

use crate::config::AppConfig;

#[component]
pub fn DetailCard(detail: DetailView) -> impl IntoView {
    let theme = expect_context::<AppConfig>().theme;
    let fallback = detail.fallback;
    let style = format!("background-color: {};", theme.detail_background(fallback));

    view! {
        <div class="detail-card" class:detail-card--fallback=fallback style=style>
            <p class="detail-card__title">"Details:"</p>
            {detail
                .lines
                .into_iter()
                .map(|line| view! { <p class="detail-card__line">{line}</p> })
                .collect::<Vec<_>>()}
        </div>
    }
}
