pub mod config;
pub mod source;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeRunnerError {
    #[error("cannot read source file {0}")]
    Source(String, #[source] std::io::Error),
}
