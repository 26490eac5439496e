use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use quiz_core::time::{DEFAULT_QUESTION_COUNT, DEFAULT_TIME_LIMIT_SECS};
use services::{ConfigError, OpenTriviaSource, QuizConfig, SessionHandle, spawn_session};
use ui::{App, UiApp, build_app_context};

const LOG_ENV: &str = "QUIZ_LOG";

/// Timed multiple-choice trivia quiz.
#[derive(Debug, Parser)]
#[command(name = "quiz", version)]
struct Args {
    /// Question source endpoint [default: $QUIZ_API_URL, then the public Open Trivia DB]
    #[arg(long, value_name = "URL")]
    endpoint: Option<Url>,

    /// Time limit for one attempt, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    time_limit_secs: u32,

    /// Questions per attempt (1-50)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_QUESTION_COUNT)]
    questions: u8,
}

impl Args {
    fn config(&self) -> Result<QuizConfig, ConfigError> {
        let config = match &self.endpoint {
            Some(endpoint) => QuizConfig::new(endpoint.clone()),
            None => QuizConfig::from_env()?,
        };
        config
            .with_question_count(self.questions)?
            .with_time_limit_secs(self.time_limit_secs)
    }
}

struct DesktopApp {
    session: SessionHandle,
    question_count: u8,
    time_limit_secs: u32,
}

impl UiApp for DesktopApp {
    fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    fn question_count(&self) -> u8 {
        self.question_count
    }

    fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let config = args.config()?;
    info!(
        endpoint = %config.endpoint(),
        questions = config.question_count(),
        time_limit_secs = config.time_limit_secs(),
        "starting quiz"
    );

    let source = Arc::new(OpenTriviaSource::new(&config));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session: spawn_session(source, &config),
        question_count: config.question_count(),
        time_limit_secs: config.time_limit_secs(),
    });
    let context = build_app_context(&app);

    // Some desktop setups default to an always-on-top window; keep it a normal one.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Challenge")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_quiz() {
        let args = Args::try_parse_from(["quiz"]).unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.question_count(), 15);
        assert_eq!(config.time_limit_secs(), 1800);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "quiz",
            "--endpoint",
            "http://localhost:8080/api.php",
            "--time-limit-secs",
            "90",
            "--questions",
            "5",
        ])
        .unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.endpoint().host_str(), Some("localhost"));
        assert_eq!(config.request_url().query(), Some("amount=5"));
        assert_eq!(config.time_limit_secs(), 90);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["quiz", "--endpoint", "not a url"]).is_err());

        let args = Args::try_parse_from(["quiz", "--questions", "0"]).unwrap();
        assert!(matches!(args.config(), Err(ConfigError::InvalidQuestionCount(0))));

        let args = Args::try_parse_from(["quiz", "--time-limit-secs", "0"]).unwrap();
        assert!(matches!(args.config(), Err(ConfigError::ZeroTimeLimit)));
    }
}
