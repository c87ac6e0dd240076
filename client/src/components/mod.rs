//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<PanelState>` and
//! `AppConfig` from Leptos context providers installed by `App`.

pub mod correction_panel;
pub mod detail_card;
pub mod notice_banner;
