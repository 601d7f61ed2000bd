pub mod assistant;
pub mod editor;
pub mod httpclient;
pub mod model;
pub mod run_code;
pub mod service;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("cannot parse response body")]
    Parse(#[from] serde_json::Error),
    #[error("response body is null")]
    NullBody,
}
