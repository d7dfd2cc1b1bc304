use finchat_common::error::status_error_message;
use finchat_common::{ErrorResponse, QueryRequest, ResponsePayload, query_error_message};
use gloo_net::http::Request;

use crate::settings;

fn query_url() -> String {
    settings::get_settings().chat.query_url()
}

/// Send one question to the query endpoint.
///
/// The error string is already the message to show under the input: server
/// `error`, then server `message`, then the transport message, then a generic
/// fallback.
pub async fn post_query(question: &str) -> Result<ResponsePayload, String> {
    let url = query_url();
    let body = QueryRequest::new(question);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST query - {}", error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = query_error_message(None, Some(&e.to_string()));
            log::error!("POST query - Request failed: {}", error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST query - Non-OK response: {}", response.status());
        let error_response: Option<ErrorResponse> = response.json().await.ok();
        let error_msg = query_error_message(
            error_response.as_ref(),
            Some(&status_error_message(response.status())),
        );
        log::error!("POST query - API error: {}", error_msg);
        return Err(error_msg);
    }

    log::trace!("POST query - Response received, parsing JSON");
    let payload: ResponsePayload = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST query - {}", error_msg);
        error_msg
    })?;

    log::info!("POST query - Success");
    Ok(payload)
}
