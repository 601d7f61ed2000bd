use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use coderunner::{
    config::CodeRunnerConfig,
    source::{read_source, resolve_language},
};
use coderunner_client::{
    editor::{AssistantView, EditorSession, NavigationState},
    model::{AssistAction, Language},
    service::CodeRunnerService,
};
use log::{debug, info, trace};

#[derive(Parser)]
#[clap(
    version = "0.1",
    about = "Run code and ask an AI assistant about it, from the command line"
)]
pub struct CodeRunnerOpts {
    /// Config file path
    #[clap(short, long)]
    config: Option<String>,
    /// Backend address, overrides the config file
    #[clap(long)]
    base_url: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run source code and print its output
    Run(SourceArgs),
    /// Ask for an explanation of the code
    Explain(SourceArgs),
    /// Ask for a fixed version of the code
    Fix {
        #[clap(flatten)]
        source: SourceArgs,
        /// Output of a previous run to send along
        #[clap(long, conflicts_with = "run")]
        output: Option<String>,
        /// Run the code first and send its output along
        #[clap(long)]
        run: bool,
    },
    /// Ask for an optimized version of the code
    Optimize(SourceArgs),
    /// Print the sample program of a language
    Sample {
        #[clap(short, long)]
        language: Option<Language>,
    },
    /// List the supported languages
    Languages,
}

#[derive(Args)]
struct SourceArgs {
    /// Language of the code, guessed from the file extension when omitted
    #[clap(short, long)]
    language: Option<Language>,
    /// Source file, `-` for stdin; the language sample is used when omitted
    file: Option<PathBuf>,
}

impl SourceArgs {
    fn into_session(self, config: &CodeRunnerConfig) -> Result<EditorSession> {
        let language =
            resolve_language(self.language, self.file.as_deref(), config.editor.language);
        let code = read_source(self.file.as_deref(), language)?;

        let mut session = EditorSession::new(language);
        session.set_theme(config.editor.theme);
        session.set_code(code);
        Ok(session)
    }
}

async fn assist(
    service: &CodeRunnerService,
    action: AssistAction,
    navigation: NavigationState,
) -> String {
    let mut view = AssistantView::open(action, navigation);
    info!("{}", view.title());
    view.load(service).await.to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let options = CodeRunnerOpts::parse();

    let mut config = match &options.config {
        Some(path) => {
            debug!("loading config file at {}", path);
            CodeRunnerConfig::load(path)?
        }
        None => CodeRunnerConfig::default(),
    };
    if let Some(base_url) = options.base_url {
        config.api.base_url = base_url;
    }
    trace!("config loaded successfully with content: {:#?}", config);

    let service = CodeRunnerService::new(config.client_options());

    match options.command {
        Command::Run(source) => {
            let mut session = source.into_session(&config)?;
            info!("Running {} ({})", session.file_name(), session.language());
            if let Some(output) = session.run(&service).await {
                println!("{}", output);
            }
        }
        Command::Explain(source) => {
            let session = source.into_session(&config)?;
            let text = assist(&service, AssistAction::Explain, session.navigation_state()).await;
            println!("{}", text);
        }
        Command::Fix {
            source,
            output,
            run,
        } => {
            let mut session = source.into_session(&config)?;
            let navigation = if run {
                session.run(&service).await;
                session.navigation_state()
            } else {
                NavigationState {
                    output,
                    ..session.navigation_state()
                }
            };
            let text = assist(&service, AssistAction::Fix, navigation).await;
            println!("{}", text);
        }
        Command::Optimize(source) => {
            let session = source.into_session(&config)?;
            let text = assist(&service, AssistAction::Optimize, session.navigation_state()).await;
            println!("{}", text);
        }
        Command::Sample { language } => {
            let language = language.unwrap_or(config.editor.language);
            println!("{}", language.sample().code);
        }
        Command::Languages => {
            for language in Language::ALL {
                println!("{:<8}{}", language, language.sample().file);
            }
        }
    }

    Ok(())
}
