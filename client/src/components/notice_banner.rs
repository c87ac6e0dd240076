//! Dismissible banner for the panel's single message slot.

use correction::PanelState;
use leptos::prelude::*;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    move || {
        panel.with(|p| p.notice).map(|notice| {
            view! {
                <div class="notice-banner" role="status">
                    <span class="notice-banner__text">{notice.text()}</span>
                    <button
                        class="notice-banner__close"
                        aria-label="Close"
                        on:click=move |_| panel.update(PanelState::dismiss_notice)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
