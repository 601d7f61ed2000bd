use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use coderunner_client::model::Language;
use log::debug;

use crate::CodeRunnerError;

/// Pick the language of a source: an explicit choice wins, then the file
/// extension, then the configured default.
pub fn resolve_language(
    explicit: Option<Language>,
    file: Option<&Path>,
    default: Language,
) -> Language {
    explicit
        .or_else(|| {
            file.and_then(|path| path.extension())
                .and_then(|extension| extension.to_str())
                .and_then(Language::from_extension)
        })
        .unwrap_or(default)
}

/// Read the code to submit. `-` reads stdin, no file gives the language sample.
pub fn read_source(file: Option<&Path>, language: Language) -> Result<String, CodeRunnerError> {
    match file {
        None => {
            debug!("No source file given, using the {} sample", language);
            Ok(language.sample().code.to_string())
        }
        Some(path) if path == Path::new("-") => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .map_err(|e| CodeRunnerError::Source("-".to_string(), e))?;
            Ok(code)
        }
        Some(path) => {
            debug!("Reading source file {}", path.display());
            fs::read_to_string(path)
                .map_err(|e| CodeRunnerError::Source(path.display().to_string(), e))
        }
    }
}
