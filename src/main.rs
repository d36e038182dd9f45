use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

use thinkofatitle::error::ErrorCode;
use thinkofatitle::gemini::config::{GeminiConfig, ServiceMode};
use thinkofatitle::gemini::direct::DirectClient;
use thinkofatitle::gemini::{self, SuggestError, SuggestionSource};
use thinkofatitle::link::{self, LinkError};
use thinkofatitle::session::SessionController;
use thinkofatitle::state::AppState;
use thinkofatitle::{frontend, routes};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Suggest(#[from] SuggestError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no preset numbered {0}; see `thinkofatitle presets`")]
    UnknownPreset(usize),
    #[error("a non-empty query is required (pass QUERY, --link or --preset)")]
    MissingQuery,
}

impl ErrorCode for AppError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Suggest(e) => e.error_code(),
            Self::Link(e) => e.error_code(),
            Self::Io(_) => "E_IO",
            Self::UnknownPreset(_) => "E_UNKNOWN_PRESET",
            Self::MissingQuery => "E_MISSING_QUERY",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "thinkofatitle", about = "Research paper title suggestions from a generative model")]
struct Cli {
    /// How clients reach the model. Overrides `TITLE_SERVICE_MODE`.
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Proxy origin used in proxy mode. Overrides `TITLE_PROXY_URL`.
    #[arg(long, global = true)]
    proxy_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Proxy,
    Direct,
}

impl From<ModeArg> for ServiceMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Proxy => Self::Proxy,
            ModeArg::Direct => Self::Direct,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the proxy server that holds the Gemini key.
    Serve {
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
    /// Generate titles once and print them as cards.
    Ask {
        query: Option<String>,
        /// Deep link whose `q` parameter supplies the query.
        #[arg(long = "link", conflicts_with_all = ["query", "preset"])]
        deep_link: Option<String>,
        /// Preset topic number (see `presets`).
        #[arg(long, conflicts_with = "query")]
        preset: Option<usize>,
        #[arg(long, env = "TITLE_SHARE_BASE", default_value = link::DEFAULT_SHARE_BASE)]
        share_base: String,
    },
    /// Line-oriented session with regenerate and reset.
    Interactive {
        /// Deep link to auto-submit on start.
        #[arg(long = "link")]
        deep_link: Option<String>,
        #[arg(long, env = "TITLE_SHARE_BASE", default_value = link::DEFAULT_SHARE_BASE)]
        share_base: String,
    },
    /// List preset topics.
    Presets,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(code = e.error_code(), error = %e, "thinkofatitle failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut config = GeminiConfig::from_env()?;
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(url) = cli.proxy_url {
        config.proxy_url = url.trim_end_matches('/').to_string();
    }

    match cli.command {
        Command::Serve { port } => {
            serve(&config, port).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask { query, deep_link, preset, share_base } => {
            let query = resolve_query(query, deep_link.as_deref(), preset)?;
            ask(&config, &query, &share_base).await
        }
        Command::Interactive { deep_link, share_base } => {
            link::reset_link(&share_base)?;
            let controller = SessionController::new(gemini::source_from_config(&config)?);
            let initial = deep_link.as_deref().and_then(link::query_from_link);
            frontend::run_interactive(controller, &share_base, initial).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Presets => {
            print!("{}", frontend::render_presets());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_query(query: Option<String>, deep_link: Option<&str>, preset: Option<usize>) -> Result<String, AppError> {
    let query = match (query, deep_link, preset) {
        (Some(query), _, _) => query,
        (None, Some(deep_link), _) => link::query_from_link(deep_link).ok_or(AppError::MissingQuery)?,
        (None, None, Some(number)) => frontend::preset(number)
            .ok_or(AppError::UnknownPreset(number))?
            .to_string(),
        (None, None, None) => return Err(AppError::MissingQuery),
    };

    if query.trim().is_empty() {
        return Err(AppError::MissingQuery);
    }
    Ok(query)
}

async fn ask(config: &GeminiConfig, query: &str, share_base: &str) -> Result<ExitCode, AppError> {
    let share = link::share_link(share_base, query)?;
    let controller = SessionController::new(gemini::source_from_config(config)?);

    controller.fetch(query).await;
    let state = controller.snapshot();

    print!("{}", frontend::render_state(&state));
    println!("\nLink: {share}");
    Ok(if state.error.is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn serve(config: &GeminiConfig, port: u16) -> Result<(), AppError> {
    // Non-fatal: without a key the proxy still runs and answers 500.
    let upstream: Option<Arc<dyn SuggestionSource>> = match DirectClient::from_config(config) {
        Ok(client) => {
            info!(model = %config.model, "gemini upstream configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!(code = e.error_code(), error = %e, "gemini upstream not configured; proxy will answer 500");
            None
        }
    };

    let app = routes::app(AppState::new(upstream));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    info!(%port, "thinkofatitle proxy listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
