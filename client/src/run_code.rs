use log::{debug, trace};
use reqwest::Client;

use crate::{
    httpclient::{read_text_field, run_post_request},
    model::{ExecutionRequest, ExecutionResult, Language, RunBody},
    ClientError,
};

/// Shown in place of the output when a run fails for any reason
pub const RUN_ERROR: &str = "Error running code!";

pub fn run_url(base_url: &str, language: Language) -> String {
    format!(
        "{}/code/run?language={}",
        base_url.trim_end_matches('/'),
        language
    )
}

pub fn parse_run_response(body: &str) -> Result<ExecutionResult, ClientError> {
    let output = read_text_field(body, "output")?;
    Ok(ExecutionResult { output })
}

pub async fn run_code(
    client: &Client,
    base_url: &str,
    request: &ExecutionRequest,
) -> Result<ExecutionResult, ClientError> {
    let url = run_url(base_url, request.language);
    let body = RunBody {
        code: &request.code,
    };
    debug!("Sending run request to {}", url);
    trace!("Request body: {:?}", body);

    let response = run_post_request(client, &url, &body).await?;
    parse_run_response(&response)
}
