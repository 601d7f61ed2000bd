use log::{debug, trace};
use reqwest::Client;

use crate::{
    httpclient::{read_text_field, run_post_request},
    model::{AssistAction, AssistRequest, AssistResult},
    ClientError,
};

pub const EXPLAIN_ERROR: &str =
    "⚠️ Failed to get explanation. Please check your connection or try later.";
pub const FIX_ERROR: &str = "⚠️ Failed to fix code. Please check your connection or try later.";
pub const OPTIMIZE_ERROR: &str =
    "⚠️ Failed to optimize code. Please check your connection or try later.";

/// The text shown instead of the assistant answer when a request fails
pub fn sentinel(action: AssistAction) -> &'static str {
    match action {
        AssistAction::Explain => EXPLAIN_ERROR,
        AssistAction::Fix => FIX_ERROR,
        AssistAction::Optimize => OPTIMIZE_ERROR,
    }
}

pub fn assist_url(base_url: &str, action: AssistAction) -> String {
    format!("{}/ai/{}", base_url.trim_end_matches('/'), action)
}

pub fn result_field(action: AssistAction, optimize_field: &str) -> &str {
    match action {
        AssistAction::Explain => "explanation",
        AssistAction::Fix => "fixedCode",
        AssistAction::Optimize => optimize_field,
    }
}

pub fn parse_assist_response(
    action: AssistAction,
    field: &str,
    body: &str,
) -> Result<AssistResult, ClientError> {
    let text = read_text_field(body, field)?;
    Ok(AssistResult::new(action, text))
}

pub async fn assist(
    client: &Client,
    base_url: &str,
    optimize_field: &str,
    request: &AssistRequest,
) -> Result<AssistResult, ClientError> {
    let url = assist_url(base_url, request.action);
    let body = request.body();
    debug!(
        "Sending {} request to {} (language: {})",
        request.action, url, request.language
    );
    trace!("Request body: {:?}", body);

    let response = run_post_request(client, &url, &body).await?;
    parse_assist_response(
        request.action,
        result_field(request.action, optimize_field),
        &response,
    )
}
