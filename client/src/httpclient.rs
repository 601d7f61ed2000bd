use log::{trace, warn};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::ClientError;

/// Post `body` as json to `url` and return the raw response body.
///
/// The status code is only logged: error responses carrying a json body are
/// handed back like any other so that the caller decides what they mean.
pub async fn run_post_request<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<String, ClientError> {
    let res = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|source| ClientError::Request {
            url: url.to_string(),
            source,
        })?;

    if !res.status().is_success() {
        warn!("{} answered with status {}", url, res.status());
    }

    let text = res.text().await.map_err(|source| ClientError::Request {
        url: url.to_string(),
        source,
    })?;
    trace!("Response body: {}", text);

    Ok(text)
}

/// Read a field out of a json response as display text.
///
/// Only a `null` body is an error. Any other body without the field, a null
/// or falsy field, or a field holding an array or object reads as the empty
/// string. Numbers and `true` are shown as written.
pub fn read_text_field(body: &str, field: &str) -> Result<String, ClientError> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Err(ClientError::NullBody);
    }

    let text = match value.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => number.to_string(),
        Some(Value::Bool(true)) => String::from("true"),
        _ => String::new(),
    };
    Ok(text)
}
