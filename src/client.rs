use finchat_common::error::status_error_message;
use finchat_common::{
    ChatConfig, ChatError, ErrorResponse, QueryRequest, ResponsePayload, query_error_message,
};
use tracing::{debug, error, info, instrument};

/// HTTP client for the query endpoint. One POST per question, no retries.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    query_url: String,
}

impl QueryClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            query_url: config.query_url(),
        }
    }

    /// Send `question` with an empty chat history.
    ///
    /// Failures come back as [`ChatError::Query`] carrying the message to show
    /// the user.
    #[instrument(skip(self), fields(url = %self.query_url))]
    pub async fn ask(&self, question: &str) -> Result<ResponsePayload, ChatError> {
        debug!("Sending query");

        let response = self
            .http
            .post(&self.query_url)
            .json(&QueryRequest::new(question))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Request failed");
                ChatError::Query(query_error_message(None, Some(&e.to_string())))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<ErrorResponse> = response.json().await.ok();
            let message =
                query_error_message(body.as_ref(), Some(&status_error_message(status.as_u16())));
            error!(status = status.as_u16(), %message, "Query rejected");
            return Err(ChatError::Query(message));
        }

        let payload = response.json::<ResponsePayload>().await.map_err(|e| {
            error!(error = %e, "Failed to parse response");
            ChatError::Query(format!("Failed to parse response: {e}"))
        })?;

        info!("Query answered");
        Ok(payload)
    }
}
