//! reqwest transport for the correction service.

use std::time::Duration;

use correction::{Correction, CorrectionError, CorrectionRequest, parse_correction};

pub struct CorrectionClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl CorrectionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint: endpoint.into(), timeout })
    }

    /// POST `{ "text": text }` and normalize the response.
    pub async fn correct(&self, text: &str) -> Result<Correction, CorrectionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&CorrectionRequest::new(text))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorrectionError::Status(status.as_u16()));
        }
        let body = response.text().await.map_err(|e| self.classify(e))?;
        parse_correction(&body, text)
    }

    fn classify(&self, err: reqwest::Error) -> CorrectionError {
        if err.is_timeout() {
            CorrectionError::Timeout { after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX) }
        } else {
            CorrectionError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
pub(crate) mod tests;
