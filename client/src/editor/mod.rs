pub mod assistant;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::{
    model::{ExecutionRequest, ExecutionResult, Language},
    run_code::RUN_ERROR,
    service::CodeRunnerServiceTrait,
    ClientError,
};

pub use assistant::{AssistantView, BackAction, NavigationState, ViewState};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// State of one editor page: the selected language, the code being edited
/// and the output of the last run.
#[derive(Debug, Clone)]
pub struct EditorSession {
    language: Language,
    code: String,
    output: String,
    theme: Theme,
    loading: bool,
}

impl EditorSession {
    pub fn new(language: Language) -> Self {
        EditorSession {
            language,
            code: language.sample().code.to_string(),
            output: String::new(),
            theme: Theme::default(),
            loading: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn file_name(&self) -> &'static str {
        self.language.sample().file
    }

    /// Switch language. The code is replaced by the sample of the new language.
    pub fn select_language(&mut self, language: Language) {
        debug!("Selecting language {}", language);
        self.language = language;
        self.code = language.sample().code.to_string();
        self.output.clear();
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn can_run(&self) -> bool {
        !self.loading
    }

    pub fn run_label(&self) -> &'static str {
        if self.loading {
            "Running..."
        } else {
            "Run"
        }
    }

    /// Start a run. Returns `None` while another run is still outstanding.
    pub fn begin_run(&mut self) -> Option<ExecutionRequest> {
        if self.loading {
            debug!("A run is already in progress");
            return None;
        }

        self.loading = true;
        self.output.clear();
        Some(ExecutionRequest {
            language: self.language,
            code: self.code.clone(),
        })
    }

    pub fn finish_run(&mut self, result: Result<ExecutionResult, ClientError>) {
        self.output = match result {
            Ok(result) => result.output,
            Err(e) => {
                error!("Error while running code: {:?}", e);
                RUN_ERROR.to_string()
            }
        };
        self.loading = false;
    }

    /// Run the current code and return the displayed output, or `None` if a
    /// run was already outstanding.
    pub async fn run(&mut self, service: &dyn CodeRunnerServiceTrait) -> Option<&str> {
        let request = self.begin_run()?;
        let result = service.run_code(request).await;
        self.finish_run(result);
        Some(self.output.as_str())
    }

    /// State handed over to an assistant view
    pub fn navigation_state(&self) -> NavigationState {
        NavigationState {
            code: Some(self.code.clone()),
            language: Some(self.language),
            theme: Some(self.theme),
            output: Some(self.output.clone()),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        EditorSession::new(Language::Python)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockCodeRunnerServiceTrait;

    fn parse_error() -> ClientError {
        serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_new_session_shows_sample() {
        let session = EditorSession::default();
        assert_eq!(session.language(), Language::Python);
        assert_eq!(session.code(), "print(\"Hello World\")");
        assert_eq!(session.file_name(), "main.py");
        assert_eq!(session.output(), "");
        assert_eq!(session.theme(), Theme::Dark);
        assert!(session.can_run());
    }

    #[test]
    fn test_select_language_resets_code_and_output() {
        let mut session = EditorSession::default();
        session.set_code("print(1 / 0)");
        session.finish_run(Ok(ExecutionResult {
            output: "ZeroDivisionError".to_string(),
        }));

        session.select_language(Language::Cpp);

        assert_eq!(session.code(), Language::Cpp.sample().code);
        assert_eq!(session.file_name(), "main.cpp");
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_clear_output() {
        let mut session = EditorSession::default();
        session.finish_run(Err(parse_error()));
        assert_eq!(session.output(), RUN_ERROR);

        session.clear_output();
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_toggle_theme() {
        let mut session = EditorSession::default();
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Light);
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_run_control_disabled_while_outstanding() {
        let mut session = EditorSession::new(Language::Js);

        let request = session.begin_run().unwrap();
        assert_eq!(request.language, Language::Js);
        assert_eq!(request.code, "console.log(\"Hello World\")");
        assert!(!session.can_run());
        assert_eq!(session.run_label(), "Running...");
        assert!(session.begin_run().is_none());

        session.finish_run(Ok(ExecutionResult {
            output: "Hello World\n".to_string(),
        }));
        assert!(session.can_run());
        assert_eq!(session.run_label(), "Run");
    }

    #[test]
    fn test_run_control_enabled_after_failure() {
        let mut session = EditorSession::default();
        session.begin_run().unwrap();
        session.finish_run(Err(parse_error()));

        assert!(session.can_run());
        assert_eq!(session.output(), RUN_ERROR);
    }

    #[test]
    fn test_begin_run_clears_previous_output() {
        let mut session = EditorSession::default();
        session.finish_run(Ok(ExecutionResult {
            output: "old".to_string(),
        }));

        session.begin_run().unwrap();
        assert_eq!(session.output(), "");
    }

    #[tokio::test]
    async fn test_run_displays_output() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service
            .expect_run_code()
            .withf(|request| request.language == Language::Python && request.code == "print('X')")
            .once()
            .returning(|_| {
                Ok(ExecutionResult {
                    output: "X".to_string(),
                })
            });

        let mut session = EditorSession::default();
        session.set_code("print('X')");

        let output = session.run(&mock_service).await;
        assert_eq!(output, Some("X"));
        assert!(session.can_run());
    }

    #[tokio::test]
    async fn test_run_failure_displays_sentinel() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service
            .expect_run_code()
            .once()
            .returning(|_| Err(ClientError::NullBody));

        let mut session = EditorSession::default();

        let output = session.run(&mock_service).await;
        assert_eq!(output, Some(RUN_ERROR));
        assert!(session.can_run());
    }

    #[tokio::test]
    async fn test_run_while_outstanding_issues_no_request() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service.expect_run_code().never();

        let mut session = EditorSession::default();
        session.begin_run().unwrap();

        assert_eq!(session.run(&mock_service).await, None);
    }

    #[test]
    fn test_navigation_state() {
        let mut session = EditorSession::new(Language::Java);
        session.toggle_theme();
        session.finish_run(Ok(ExecutionResult {
            output: "Hello World".to_string(),
        }));

        let state = session.navigation_state();
        assert_eq!(state.language, Some(Language::Java));
        assert_eq!(state.code.as_deref(), Some(Language::Java.sample().code));
        assert_eq!(state.theme, Some(Theme::Light));
        assert_eq!(state.output.as_deref(), Some("Hello World"));
    }
}
