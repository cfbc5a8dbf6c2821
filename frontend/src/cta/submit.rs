use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;
use web_sys::AbortSignal;

use super::contact_form::FormData;
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission aborted")]
    Aborted,
    #[error("contact request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

/// Sends the contact form. Posts JSON to the configured endpoint, or waits a
/// fixed delay when none is configured. Once `signal` is aborted the result is
/// always `SubmitError::Aborted`.
pub async fn submit_contact(data: &FormData, signal: &AbortSignal) -> Result<(), SubmitError> {
    let Some(url) = config::contact_endpoint() else {
        TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
        return if signal.aborted() { Err(SubmitError::Aborted) } else { Ok(()) };
    };

    let result = Request::post(url)
        .abort_signal(Some(signal))
        .header("Content-Type", "application/json")
        .json(data)?
        .send()
        .await;

    if signal.aborted() {
        return Err(SubmitError::Aborted);
    }

    let response = result?;
    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }
    Ok(())
}
