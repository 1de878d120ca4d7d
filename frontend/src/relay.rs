use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use crate::config;
use crate::inquiry::Inquiry;

/// Every way a relay call can fail. The UI collapses all of them into one
/// error state; the variants only exist for the console trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("relay rejected the inquiry with status {status}")]
    Rejected { status: u16 },
    #[error("failed to encode inquiry: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
}

pub fn check_status(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::Rejected { status })
    }
}

/// Posts the inquiry to the form relay. Only the status code is inspected.
pub async fn send_inquiry(inquiry: &Inquiry) -> Result<(), SubmissionError> {
    let result = post_inquiry(inquiry).await;
    match &result {
        Ok(()) => info!("Inquiry relayed"),
        Err(e) => gloo_console::error!("Submission error:", e.to_string()),
    }
    result
}

async fn post_inquiry(inquiry: &Inquiry) -> Result<(), SubmissionError> {
    let response = Request::post(&config::get_relay_url())
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(inquiry)
        .map_err(|e| SubmissionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::Transport(e.to_string()))?;

    check_status(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_range_is_success() {
        for status in [200, 201, 204, 299] {
            assert_eq!(check_status(status), Ok(()), "status {}", status);
        }
    }

    #[test]
    fn anything_outside_ok_range_is_rejected() {
        for status in [0, 199, 301, 400, 422, 500, 503] {
            assert_eq!(
                check_status(status),
                Err(SubmissionError::Rejected { status }),
                "status {}",
                status
            );
        }
    }

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(
            SubmissionError::Rejected { status: 500 }.to_string(),
            "relay rejected the inquiry with status 500"
        );
        assert_eq!(
            SubmissionError::Transport("NetworkError".into()).to_string(),
            "request failed: NetworkError"
        );
    }
}
