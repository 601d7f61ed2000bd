use log::{debug, error, info};

use crate::{
    assistant::sentinel,
    model::{AssistAction, AssistRequest, Language},
    service::CodeRunnerServiceTrait,
};

use super::Theme;

pub const NOTHING_TO_DO: &str = "No code or language provided.";

/// What the editor hands over when opening an assistant view. Any field may
/// be missing when the view is reached directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub code: Option<String>,
    pub language: Option<Language>,
    pub theme: Option<Theme>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Code or language is missing, nothing will be requested
    NothingToDo,
    Loading(AssistRequest),
    Loaded(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Return to the landing page
    Home,
    /// Return to the page the view was opened from
    Previous,
}

#[derive(Debug, Clone)]
pub struct AssistantView {
    action: AssistAction,
    theme: Theme,
    state: ViewState,
}

impl AssistantView {
    pub fn open(action: AssistAction, navigation: NavigationState) -> Self {
        let theme = navigation.theme.unwrap_or_default();
        let state = match (navigation.code, navigation.language) {
            (Some(code), Some(language)) if !code.is_empty() => {
                let mut request = AssistRequest::new(action, language, code);
                request.output = navigation.output;
                ViewState::Loading(request)
            }
            _ => {
                info!("Nothing to {}: no code or language provided", action);
                ViewState::NothingToDo
            }
        };

        AssistantView {
            action,
            theme,
            state,
        }
    }

    pub fn action(&self) -> AssistAction {
        self.action
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading(_))
    }

    pub fn title(&self) -> &'static str {
        match self.action {
            AssistAction::Explain => "Code Explanation",
            AssistAction::Fix => "Fixed Code",
            AssistAction::Optimize => "Optimized Code",
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self.action {
            AssistAction::Explain => "Loading AI explanation...",
            AssistAction::Fix => "Loading AI fixed code...",
            AssistAction::Optimize => "Loading AI optimized code...",
        }
    }

    /// The text currently displayed by the view
    pub fn text(&self) -> &str {
        match &self.state {
            ViewState::NothingToDo => NOTHING_TO_DO,
            ViewState::Loading(_) => self.loading_text(),
            ViewState::Loaded(text) => text,
        }
    }

    pub fn back_action(&self) -> BackAction {
        match self.state {
            ViewState::NothingToDo => BackAction::Home,
            _ => BackAction::Previous,
        }
    }

    /// Issue the assistant request of a loading view. Views in any other
    /// state are left untouched.
    pub async fn load(&mut self, service: &dyn CodeRunnerServiceTrait) -> &str {
        if let ViewState::Loading(request) = &self.state {
            debug!("Loading {} view", self.action);
            let text = match service.assist(request.clone()).await {
                Ok(result) => result.into_text(),
                Err(e) => {
                    error!("Error while requesting {}: {:?}", self.action, e);
                    sentinel(self.action).to_string()
                }
            };
            self.state = ViewState::Loaded(text);
        }

        self.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assistant::{EXPLAIN_ERROR, FIX_ERROR},
        model::AssistResult,
        service::MockCodeRunnerServiceTrait,
        ClientError,
    };

    fn navigation(code: &str, language: Language) -> NavigationState {
        NavigationState {
            code: Some(code.to_string()),
            language: Some(language),
            theme: None,
            output: Some("Traceback".to_string()),
        }
    }

    #[tokio::test]
    async fn test_missing_state_never_requests() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service.expect_assist().never();

        let mut view = AssistantView::open(AssistAction::Explain, NavigationState::default());
        assert_eq!(view.state(), &ViewState::NothingToDo);
        assert_eq!(view.back_action(), BackAction::Home);

        assert_eq!(view.load(&mock_service).await, NOTHING_TO_DO);
    }

    #[tokio::test]
    async fn test_missing_language_or_empty_code_never_requests() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service.expect_assist().never();

        let mut without_language = AssistantView::open(
            AssistAction::Fix,
            NavigationState {
                code: Some("print(x)".to_string()),
                ..Default::default()
            },
        );
        let mut empty_code = AssistantView::open(
            AssistAction::Fix,
            navigation("", Language::Python),
        );

        assert_eq!(without_language.load(&mock_service).await, NOTHING_TO_DO);
        assert_eq!(empty_code.load(&mock_service).await, NOTHING_TO_DO);
    }

    #[test]
    fn test_open_view_is_loading() {
        let view = AssistantView::open(AssistAction::Optimize, navigation("x", Language::Cpp));

        assert!(view.is_loading());
        assert_eq!(view.text(), "Loading AI optimized code...");
        assert_eq!(view.title(), "Optimized Code");
        assert_eq!(view.theme(), Theme::Dark);
        assert_eq!(view.back_action(), BackAction::Previous);
    }

    #[tokio::test]
    async fn test_explain_displays_explanation() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service
            .expect_assist()
            .withf(|request| {
                request.action == AssistAction::Explain
                    && request.language == Language::Java
                    && request.code == "class A {}"
            })
            .once()
            .returning(|_| Ok(AssistResult::Explanation("## A class".to_string())));

        let mut view = AssistantView::open(
            AssistAction::Explain,
            navigation("class A {}", Language::Java),
        );

        assert_eq!(view.load(&mock_service).await, "## A class");
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_fix_sends_last_output() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service
            .expect_assist()
            .withf(|request| request.output.as_deref() == Some("Traceback"))
            .once()
            .returning(|_| Ok(AssistResult::FixedCode("print(1)".to_string())));

        let mut view = AssistantView::open(
            AssistAction::Fix,
            navigation("print(x)", Language::Python),
        );

        assert_eq!(view.load(&mock_service).await, "print(1)");
    }

    #[tokio::test]
    async fn test_failure_displays_action_sentinel() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service
            .expect_assist()
            .times(2)
            .returning(|_| Err(ClientError::NullBody));

        let mut explain = AssistantView::open(AssistAction::Explain, navigation("x", Language::Js));
        let mut fix = AssistantView::open(AssistAction::Fix, navigation("x", Language::Js));

        assert_eq!(explain.load(&mock_service).await, EXPLAIN_ERROR);
        assert_eq!(fix.load(&mock_service).await, FIX_ERROR);
    }

    #[tokio::test]
    async fn test_loaded_view_is_not_requested_again() {
        let mut mock_service = MockCodeRunnerServiceTrait::new();
        mock_service
            .expect_assist()
            .once()
            .returning(|_| Ok(AssistResult::Explanation("done".to_string())));

        let mut view = AssistantView::open(AssistAction::Explain, navigation("x", Language::Js));
        view.load(&mock_service).await;

        assert_eq!(view.load(&mock_service).await, "done");
    }
}
