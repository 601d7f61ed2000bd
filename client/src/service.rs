use async_trait::async_trait;
use log::{debug, error};
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use uuid::Uuid;

use crate::{
    assistant,
    model::{AssistRequest, AssistResult, ExecutionRequest, ExecutionResult},
    run_code, ClientError,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_OPTIMIZE_FIELD: &str = "optimizedCode";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Address of the backend serving both the execution and the assistant endpoints
    pub base_url: String,
    /// Response field holding the optimized code
    pub optimize_field: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            base_url: DEFAULT_BASE_URL.to_string(),
            optimize_field: DEFAULT_OPTIMIZE_FIELD.to_string(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CodeRunnerServiceTrait: Send + Sync {
    async fn run_code(&self, request: ExecutionRequest) -> Result<ExecutionResult, ClientError>;
    async fn assist(&self, request: AssistRequest) -> Result<AssistResult, ClientError>;
}

pub struct CodeRunnerService {
    client: Client,
    options: ClientOptions,
}

impl CodeRunnerService {
    pub fn new(options: ClientOptions) -> Self {
        CodeRunnerService {
            client: Client::new(),
            options,
        }
    }
}

#[async_trait]
impl CodeRunnerServiceTrait for CodeRunnerService {
    async fn run_code(&self, request: ExecutionRequest) -> Result<ExecutionResult, ClientError> {
        let id = Uuid::new_v4();
        debug!("Starting run {} (language: {})", id, request.language);

        let result = run_code::run_code(&self.client, &self.options.base_url, &request).await;
        match &result {
            Ok(_) => debug!("Run {} ended", id),
            Err(e) => error!("Run {} failed: {:?}", id, e),
        }
        result
    }

    async fn assist(&self, request: AssistRequest) -> Result<AssistResult, ClientError> {
        let id = Uuid::new_v4();
        debug!(
            "Starting {} request {} (language: {})",
            request.action, id, request.language
        );

        let result = assistant::assist(
            &self.client,
            &self.options.base_url,
            &self.options.optimize_field,
            &request,
        )
        .await;
        match &result {
            Ok(_) => debug!("{} request {} ended", request.action, id),
            Err(e) => error!("{} request {} failed: {:?}", request.action, id, e),
        }
        result
    }
}
