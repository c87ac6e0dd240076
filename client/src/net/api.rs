//! HTTP call to the correction service.
//!
//! Client-side (hydrate): a `fetch` via `gloo-net`, raced against a
//! `gloo-timers` timeout that aborts the request when it fires.
//! Server-side (SSR): no transport; callers get
//! [`CorrectionError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`CorrectionError`] value. The panel turns
//! all of them into the same connectivity notice; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use correction::{Correction, CorrectionError};
#[cfg(feature = "hydrate")]
use correction::{CorrectionRequest, parse_correction};

/// Clamp a millisecond timeout into the range browser timers accept.
#[cfg(any(test, feature = "hydrate"))]
fn timer_millis(timeout_ms: u64) -> u32 {
    u32::try_from(timeout_ms).unwrap_or(u32::MAX)
}

/// Map a response status into the failure it represents, if any.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), CorrectionError> {
    if ok { Ok(()) } else { Err(CorrectionError::Status(status)) }
}

/// POST `{ "text": text }` to `endpoint` and normalize the response.
///
/// # Errors
///
/// Returns a [`CorrectionError`] on network failure, non-2xx status,
/// timeout, or an undecodable body.
pub async fn request_correction(endpoint: &str, text: &str, timeout_ms: u64) -> Result<Correction, CorrectionError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        let request = gloo_net::http::Request::post(endpoint)
            .abort_signal(signal.as_ref())
            .json(&CorrectionRequest::new(text))
            .map_err(|e| CorrectionError::Network(e.to_string()))?;

        let fetch = Box::pin(async move {
            let resp = request
                .send()
                .await
                .map_err(|e| CorrectionError::Network(e.to_string()))?;
            check_status(resp.ok(), resp.status())?;
            let body = resp
                .text()
                .await
                .map_err(|e| CorrectionError::Network(e.to_string()))?;
            parse_correction(&body, text)
        });
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timer_millis(timeout_ms)));

        match select(fetch, timeout).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                if let Some(controller) = controller {
                    controller.abort();
                }
                Err(CorrectionError::Timeout { after_ms: timeout_ms })
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, text, timeout_ms);
        Err(CorrectionError::Unavailable)
    }
}
