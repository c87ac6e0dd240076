//! Correction panel: input box, action buttons, and result output.

use correction::panel::OUTPUT_PLACEHOLDER;
use correction::{PanelState, PendingCorrection};
use leptos::prelude::*;

use crate::components::detail_card::DetailCard;
use crate::config::AppConfig;

/// Three-box correction layout.
///
/// Reads and writes the shared `RwSignal<PanelState>`; submitting spawns the
/// one HTTP request and settles the panel when it completes.
#[component]
pub fn CorrectionPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let config = expect_context::<AppConfig>();

    let on_submit = move |_| {
        let Some(pending) = panel.try_update(PanelState::begin_submit).flatten() else {
            return;
        };
        dispatch(panel, &config, pending);
    };

    let on_clear = move |_| panel.update(PanelState::clear);

    view! {
        <div class="three-box-layout">
            <section class="box input-box">
                <h2 class="box-title">"Input Text"</h2>
                <textarea
                    class="input-box__field"
                    rows="12"
                    placeholder="Enter your text..."
                    prop:value=move || panel.with(|p| p.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|p| p.set_input(value));
                    }
                ></textarea>
            </section>

            <div class="box button-box">
                <button
                    class="btn btn--primary"
                    on:click=on_submit
                    disabled=move || !panel.with(PanelState::can_submit)
                >
                    {move || {
                        panel
                            .with(|p| p.loading)
                            .then(|| view! { <span class="btn__spinner" aria-hidden="true"></span> })
                    }}
                    <span class="btn__label">{move || panel.with(PanelState::submit_label)}</span>
                </button>
                <button class="btn btn--outlined" on:click=on_clear>
                    "Clear All"
                </button>
            </div>

            <section class="box output-box">
                <h2 class="box-title">"Corrected Text"</h2>
                <div class="output-box__content">
                    <Show
                        when=move || panel.with(PanelState::has_output)
                        fallback=|| view! { <p class="output-box__placeholder">{OUTPUT_PLACEHOLDER}</p> }
                    >
                        <p class="output-box__text">{move || panel.with(|p| p.corrected.clone())}</p>
                        {move || panel.with(PanelState::detail_view).map(|detail| view! { <DetailCard detail/> })}
                    </Show>
                </div>
            </section>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn dispatch(panel: RwSignal<PanelState>, config: &AppConfig, pending: PendingCorrection) {
    let endpoint = config.endpoint.clone();
    let timeout_ms = config.timeout_ms;
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::request_correction(&endpoint, pending.text(), timeout_ms).await;
        if let Err(e) = &outcome {
            log::error!("correction request failed ({}): {e}", e.code());
        }
        let settled = panel.try_update(|p| p.settle(&pending, outcome));
        if settled == Some(correction::Settlement::Stale) {
            log::debug!("dropped stale correction response (generation {})", pending.generation());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn dispatch(panel: RwSignal<PanelState>, config: &AppConfig, pending: PendingCorrection) {
    let _ = (panel, config, pending);
}
