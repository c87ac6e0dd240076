//! CorrectionPanel state machine.
//!
//! DESIGN
//! ======
//! The panel is idle, loading, or settled. A submission is split into two
//! transitions so the await can happen anywhere (browser task, tokio):
//!
//! 1. [`PanelState::begin_submit`] validates, clears the previous result,
//!    raises `loading`, and hands out a [`PendingCorrection`] ticket.
//! 2. [`PanelState::settle`] applies the outcome for that ticket and always
//!    drops `loading`.
//!
//! Each ticket carries the generation it was issued under. `clear` advances
//! the generation, so a response that lands after the user cleared the panel
//! is reported as [`Settlement::Stale`] and its outcome is discarded. `clear`
//! leaves `loading` raised: only the settle of the in-flight ticket drops it,
//! so a second request can never start while the first is outstanding.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::detail::{DetailView, detail_view};
use crate::error::CorrectionError;
use crate::notice::Notice;
use crate::wire::{Correction, DetailRecord};

/// Output area text while there is no corrected text.
pub const OUTPUT_PLACEHOLDER: &str = "Corrected text will appear here...";
/// Submit button label when idle.
pub const SUBMIT_LABEL: &str = "Correct Spelling";
/// Submit button label while a request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Correcting...";

/// All state owned by the correction panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub input: String,
    pub corrected: String,
    pub detail: Option<DetailRecord>,
    pub loading: bool,
    pub notice: Option<Notice>,
    generation: u64,
    /// Generation of the ticket still awaiting `settle`.
    in_flight: Option<u64>,
}

/// Ticket for one dispatched request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCorrection {
    generation: u64,
    text: String,
}

impl PendingCorrection {
    /// The exact text to send, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of handing an outcome to [`PanelState::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// The ticket was superseded by `clear` or already settled.
    Stale,
}

impl PanelState {
    /// Keystroke update of the input box.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit is enabled only when idle with non-blank input.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Start a submission.
    ///
    /// Returns `None` without touching the network when a request is already
    /// in flight, or when the input is blank (which also sets
    /// [`Notice::EmptyInput`]).
    pub fn begin_submit(&mut self) -> Option<PendingCorrection> {
        if self.loading {
            return None;
        }
        if self.input.trim().is_empty() {
            self.notice = Some(Notice::EmptyInput);
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.in_flight = Some(self.generation);
        self.loading = true;
        self.notice = None;
        self.corrected.clear();
        self.detail = None;

        Some(PendingCorrection { generation: self.generation, text: self.input.clone() })
    }

    /// Apply the outcome of the request identified by `pending`.
    pub fn settle(&mut self, pending: &PendingCorrection, outcome: Result<Correction, CorrectionError>) -> Settlement {
        if self.in_flight != Some(pending.generation) {
            return Settlement::Stale;
        }

        self.in_flight = None;
        self.loading = false;
        if pending.generation != self.generation {
            return Settlement::Stale;
        }

        match outcome {
            Ok(correction) => {
                if correction.is_unchanged(&pending.text) {
                    self.notice = Some(Notice::NoChanges);
                }
                self.corrected = correction.corrected;
                self.detail = correction.detail;
            }
            Err(_) => {
                self.notice = Some(Notice::Unreachable);
            }
        }
        Settlement::Applied
    }

    /// Reset input, output, message, and detail.
    ///
    /// A request still in flight keeps `loading` raised; its eventual outcome
    /// settles as stale.
    pub fn clear(&mut self) {
        self.input.clear();
        self.corrected.clear();
        self.notice = None;
        self.detail = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Banner close button. Leaves everything else alone.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn output_text(&self) -> &str {
        if self.corrected.is_empty() { OUTPUT_PLACEHOLDER } else { &self.corrected }
    }

    #[must_use]
    pub fn has_output(&self) -> bool {
        !self.corrected.is_empty()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL }
    }

    #[must_use]
    pub fn notice_text(&self) -> Option<&'static str> {
        self.notice.map(Notice::text)
    }

    /// Detail block, shown only alongside corrected text.
    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        if !self.has_output() {
            return None;
        }
        self.detail.as_ref().map(detail_view)
    }
}
