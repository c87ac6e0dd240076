//! Shared correction contract for the spelling-correction UI.
//!
//! This crate owns the wire representation spoken to the correction service
//! and the panel state machine driven by both `client` and `cli`. It performs
//! no I/O: callers send the request however their platform allows and hand
//! the outcome back to [`PanelState::settle`].

pub mod detail;
pub mod error;
pub mod notice;
pub mod panel;
pub mod wire;

pub use detail::{DetailView, detail_view, format_percent, format_seconds};
pub use error::CorrectionError;
pub use notice::Notice;
pub use panel::{PanelState, PendingCorrection, Settlement};
pub use wire::{
    Correction, CorrectionRequest, CorrectionResponse, DEFAULT_CORRECTION_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_MS, DetailRecord, parse_correction,
};
