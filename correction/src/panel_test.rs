use super::*;

fn typed(text: &str) -> PanelState {
    let mut state = PanelState::default();
    state.set_input(text);
    state
}

fn simple(corrected: &str) -> Correction {
    Correction { corrected: corrected.to_owned(), detail: None, from_input: false }
}

fn detailed(corrected: &str, used_fallback: bool) -> Correction {
    Correction {
        corrected: corrected.to_owned(),
        detail: Some(DetailRecord {
            original: "fixde text".to_owned(),
            corrected: corrected.to_owned(),
            confidence: Some(93.0),
            accuracy: Some(87.125),
            used_fallback,
            time_taken_seconds: Some(1.25),
        }),
        from_input: false,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_idle_and_empty() {
    let state = PanelState::default();
    assert!(state.input.is_empty());
    assert!(state.corrected.is_empty());
    assert!(state.detail.is_none());
    assert!(!state.loading);
    assert!(state.notice.is_none());
    assert_eq!(state.output_text(), OUTPUT_PLACEHOLDER);
    assert_eq!(state.submit_label(), SUBMIT_LABEL);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_input_never_dispatches() {
    for input in ["", " ", "\n\t  "] {
        let mut state = typed(input);
        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.notice, Some(Notice::EmptyInput));
        assert!(!state.loading);
    }
}

#[test]
fn submit_while_loading_is_ignored() {
    let mut state = typed("helo");
    let first = state.begin_submit().unwrap();
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.generation(), first.generation());
    assert!(state.notice.is_none());
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn begin_submit_raises_loading_and_clears_previous_result() {
    let mut state = typed("fixde text");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(detailed("fixed text", false)));
    state.set_input("anothr");
    state.notice = Some(Notice::NoChanges);

    let pending = state.begin_submit().unwrap();
    assert!(state.loading);
    assert_eq!(state.submit_label(), SUBMIT_BUSY_LABEL);
    assert!(state.corrected.is_empty());
    assert!(state.detail.is_none());
    assert!(state.notice.is_none());
    assert_eq!(pending.text(), "anothr");
}

#[test]
fn loading_drops_on_success_and_failure() {
    let outcomes = [Ok(simple("x")), Err(CorrectionError::Timeout { after_ms: 30_000 })];
    for outcome in outcomes {
        let mut state = typed("y");
        let pending = state.begin_submit().unwrap();
        assert!(state.loading);
        assert_eq!(state.settle(&pending, outcome), Settlement::Applied);
        assert!(!state.loading);
    }
}

#[test]
fn successful_correction_sets_output_without_notice() {
    let mut state = typed("fixde text");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(simple("fixed text")));
    assert_eq!(state.corrected, "fixed text");
    assert_eq!(state.output_text(), "fixed text");
    assert!(state.notice.is_none());
    assert!(state.detail.is_none());
}

#[test]
fn unchanged_correction_sets_no_changes_notice() {
    let mut state = typed("all good here");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(simple("all good here")));
    assert_eq!(state.corrected, "all good here");
    assert_eq!(state.notice, Some(Notice::NoChanges));
}

#[test]
fn unchanged_check_is_verbatim() {
    let mut state = typed("text ");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(simple("text")));
    assert!(state.notice.is_none());
}

#[test]
fn transport_failure_sets_unreachable_and_leaves_output_empty() {
    let errors = [
        CorrectionError::Network("connection refused".to_owned()),
        CorrectionError::Timeout { after_ms: 30_000 },
        CorrectionError::Status(502),
        CorrectionError::Decode("eof".to_owned()),
    ];
    for err in errors {
        let mut state = typed("fixde text");
        let pending = state.begin_submit().unwrap();
        state.settle(&pending, Err(err));
        assert_eq!(state.notice, Some(Notice::Unreachable));
        assert!(!state.loading);
        assert!(state.corrected.is_empty());
        assert!(state.detail.is_none());
        assert_eq!(state.output_text(), OUTPUT_PLACEHOLDER);
    }
}

#[test]
fn detailed_success_exposes_detail_view() {
    let mut state = typed("fixde text");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(detailed("fixed text", false)));
    let view = state.detail_view().unwrap();
    assert!(!view.fallback);
    assert_eq!(view.lines.len(), 5);
    assert!(view.lines.contains(&"Confidence: 93.00%".to_owned()));
}

#[test]
fn fallback_detail_view_hides_metrics() {
    let mut state = typed("fixde text");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(detailed("fixed text", true)));
    let view = state.detail_view().unwrap();
    assert!(view.fallback);
    assert_eq!(view.lines, vec![crate::detail::FALLBACK_NOTICE.to_owned(), "Time Taken: 1.25s".to_owned()]);
}

// =============================================================
// Clear / dismiss
// =============================================================

#[test]
fn clear_resets_everything() {
    let mut state = typed("fixde text");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(detailed("fixde text", false)));
    assert!(state.notice.is_some());

    state.clear();
    assert!(state.input.is_empty());
    assert!(state.corrected.is_empty());
    assert!(state.notice.is_none());
    assert!(state.detail.is_none());
    assert!(state.detail_view().is_none());
}

#[test]
fn response_after_clear_is_stale() {
    let mut state = typed("fixde text");
    let pending = state.begin_submit().unwrap();
    state.clear();
    assert!(state.loading);

    assert_eq!(state.settle(&pending, Ok(simple("fixed text"))), Settlement::Stale);
    assert!(!state.loading);
    assert!(state.corrected.is_empty());
    assert!(state.notice.is_none());
}

#[test]
fn clear_does_not_allow_a_second_request_in_flight() {
    let mut state = typed("helo");
    let first = state.begin_submit().unwrap();
    state.clear();
    state.set_input("wrld");
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.submit_label(), SUBMIT_BUSY_LABEL);

    assert_eq!(state.settle(&first, Err(CorrectionError::Status(500))), Settlement::Stale);
    assert!(!state.loading);
    assert!(state.notice.is_none());
    assert_eq!(state.input, "wrld");

    let second = state.begin_submit().unwrap();
    assert_eq!(second.text(), "wrld");
    assert_eq!(state.settle(&second, Ok(simple("world"))), Settlement::Applied);
    assert_eq!(state.corrected, "world");
}

#[test]
fn cleared_ticket_cannot_end_a_later_request() {
    let mut state = typed("first");
    let old = state.begin_submit().unwrap();
    state.clear();
    state.set_input("second");
    assert_eq!(state.settle(&old, Ok(simple("first!"))), Settlement::Stale);

    let current = state.begin_submit().unwrap();
    assert_eq!(state.settle(&old, Err(CorrectionError::Unavailable)), Settlement::Stale);
    assert!(state.loading);

    assert_eq!(state.settle(&current, Ok(simple("second!"))), Settlement::Applied);
    assert_eq!(state.corrected, "second!");
}

#[test]
fn echoed_input_does_not_read_as_no_changes() {
    let mut state = typed("helo wrld");
    let pending = state.begin_submit().unwrap();
    let correction = crate::wire::parse_correction("{}", pending.text()).unwrap();
    state.settle(&pending, Ok(correction));
    assert_eq!(state.corrected, "helo wrld");
    assert!(state.notice.is_none());
}

#[test]
fn settling_twice_is_stale() {
    let mut state = typed("a");
    let pending = state.begin_submit().unwrap();
    assert_eq!(state.settle(&pending, Ok(simple("b"))), Settlement::Applied);
    assert_eq!(state.settle(&pending, Err(CorrectionError::Unavailable)), Settlement::Stale);
    assert_eq!(state.corrected, "b");
    assert!(state.notice.is_none());
}

#[test]
fn dismiss_only_clears_notice() {
    let mut state = typed("same");
    let pending = state.begin_submit().unwrap();
    state.settle(&pending, Ok(simple("same")));
    state.dismiss_notice();
    assert!(state.notice.is_none());
    assert_eq!(state.input, "same");
    assert_eq!(state.corrected, "same");
}
