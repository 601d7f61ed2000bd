use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("unsupported language: {0}")]
pub struct ParseLanguageError(pub String);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Cpp,
    Js,
}

/// The starter program shown when a language is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Display name of the source file
    pub file: &'static str,
    /// Source text
    pub code: &'static str,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Js,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Js => "js",
        }
    }

    pub fn sample(&self) -> Sample {
        match self {
            Language::Python => Sample {
                file: "main.py",
                code: "print(\"Hello World\")",
            },
            Language::Java => Sample {
                file: "Main.java",
                code: "public class Main{\n    public static void main(String[] args){\n        System.out.println(\"Hello World\");\n    }\n}",
            },
            Language::Cpp => Sample {
                file: "main.cpp",
                code: "#include <iostream>\nint main(){\n    std::cout << \"Hello World\";\n    return 0;\n}",
            },
            Language::Js => Sample {
                file: "main.js",
                code: "console.log(\"Hello World\")",
            },
        }
    }

    /// Guess the language of a source file from its extension.
    pub fn from_extension(extension: &str) -> Option<Language> {
        match extension.to_ascii_lowercase().as_str() {
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" => Some(Language::Cpp),
            "js" | "mjs" => Some(Language::Js),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRequest {
    pub language: Language,
    pub code: String,
}

#[derive(Serialize, Debug)]
pub struct RunBody<'a> {
    pub code: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub output: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssistAction {
    Explain,
    Fix,
    Optimize,
}

impl AssistAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistAction::Explain => "explain",
            AssistAction::Fix => "fix",
            AssistAction::Optimize => "optimize",
        }
    }
}

impl fmt::Display for AssistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistRequest {
    pub action: AssistAction,
    pub language: Language,
    pub code: String,
    /// Output of the last run, only sent along with a fix
    pub output: Option<String>,
}

impl AssistRequest {
    pub fn new(action: AssistAction, language: Language, code: String) -> Self {
        AssistRequest {
            action,
            language,
            code,
            output: None,
        }
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn body(&self) -> AssistBody<'_> {
        AssistBody {
            code: &self.code,
            language: self.language,
            output: match self.action {
                AssistAction::Fix => self.output.as_deref(),
                _ => None,
            },
        }
    }
}

#[derive(Serialize, Debug)]
pub struct AssistBody<'a> {
    pub code: &'a str,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistResult {
    Explanation(String),
    FixedCode(String),
    OptimizedCode(String),
}

impl AssistResult {
    pub fn new(action: AssistAction, text: String) -> Self {
        match action {
            AssistAction::Explain => AssistResult::Explanation(text),
            AssistAction::Fix => AssistResult::FixedCode(text),
            AssistAction::Optimize => AssistResult::OptimizedCode(text),
        }
    }

    /// The markdown text returned by the assistant
    pub fn text(&self) -> &str {
        match self {
            AssistResult::Explanation(text)
            | AssistResult::FixedCode(text)
            | AssistResult::OptimizedCode(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            AssistResult::Explanation(text)
            | AssistResult::FixedCode(text)
            | AssistResult::OptimizedCode(text) => text,
        }
    }
}
