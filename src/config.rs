use anyhow::Result;
use coderunner_client::{
    editor::Theme,
    model::Language,
    service::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_OPTIMIZE_FIELD},
};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufReader, Read},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeRunnerConfigError {
    #[error("cannot load config file")]
    Load(#[from] io::Error),
    #[error("cannot parse config file")]
    Parse(#[from] serde_yaml::Error),
    #[error("unsupported config kind")]
    KindNotSupported,
    #[error("unsupported config api version")]
    VersionNotSupported,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[allow(non_snake_case)]
pub struct CodeRunnerConfig {
    /// The api version of the coderunner config file
    pub apiVersion: String,
    /// The kind of the coderunner config file
    pub kind: String,
    /// The backend configuration
    #[serde(default)]
    pub api: CodeRunnerApiConfig,
    /// The AI assistant configuration
    #[serde(default)]
    pub assistant: CodeRunnerAssistantConfig,
    /// The editor configuration
    #[serde(default)]
    pub editor: CodeRunnerEditorConfig,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct CodeRunnerApiConfig {
    /// Base url of the execution and assistant endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct CodeRunnerAssistantConfig {
    /// Response field holding the result of an optimize request
    #[serde(default = "default_optimize_field")]
    pub optimize_field: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct CodeRunnerEditorConfig {
    /// Language selected when none is given
    #[serde(default = "default_language")]
    pub language: Language,
    /// Theme of the editor
    #[serde(default)]
    pub theme: Theme,
}

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

fn default_optimize_field() -> String {
    String::from(DEFAULT_OPTIMIZE_FIELD)
}

fn default_language() -> Language {
    Language::Python
}

impl Default for CodeRunnerApiConfig {
    fn default() -> Self {
        CodeRunnerApiConfig {
            base_url: default_base_url(),
        }
    }
}

impl Default for CodeRunnerAssistantConfig {
    fn default() -> Self {
        CodeRunnerAssistantConfig {
            optimize_field: default_optimize_field(),
        }
    }
}

impl Default for CodeRunnerEditorConfig {
    fn default() -> Self {
        CodeRunnerEditorConfig {
            language: default_language(),
            theme: Theme::default(),
        }
    }
}

impl Default for CodeRunnerConfig {
    fn default() -> Self {
        CodeRunnerConfig {
            apiVersion: String::from("coderunner.io/v1alpha1"),
            kind: String::from("Config"),
            api: CodeRunnerApiConfig::default(),
            assistant: CodeRunnerAssistantConfig::default(),
            editor: CodeRunnerEditorConfig::default(),
        }
    }
}

impl CodeRunnerConfig {
    /// Load a CodeRunnerConfig from a file.
    ///
    /// Arguments:
    ///
    /// * `path`: The path to the config file.
    ///
    /// Returns:
    ///
    /// A Result<CodeRunnerConfig>
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(CodeRunnerConfigError::Load)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: CodeRunnerConfig =
            serde_yaml::from_reader(reader).map_err(CodeRunnerConfigError::Parse)?;

        if config.kind != "Config" {
            return Err(CodeRunnerConfigError::KindNotSupported.into());
        }

        if config.apiVersion != "coderunner.io/v1alpha1" {
            return Err(CodeRunnerConfigError::VersionNotSupported.into());
        }

        Ok(config)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.api.base_url.clone(),
            optimize_field: self.assistant.optimize_field.clone(),
        }
    }
}
