use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::parse_millis;
use services::{ConfigError, HttpTutorApi, TutorApi, TutorConfig};
use tracing_subscriber::EnvFilter;
use tutor_core::model::{Difficulty, ParseChoiceError, Topic};
use ui::{App, UiApp, build_app_context};

mod terminal;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidChoice(ParseChoiceError),
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidChoice(err) => write!(f, "{err}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

impl From<ParseChoiceError> for ArgsError {
    fn from(err: ParseChoiceError) -> Self {
        ArgsError::InvalidChoice(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    api: Arc<HttpTutorApi>,
    config: TutorConfig,
}

impl UiApp for DesktopApp {
    fn tutor_api(&self) -> Arc<dyn TutorApi> {
        self.api.clone()
    }

    fn config(&self) -> TutorConfig {
        self.config.clone()
    }
}

struct Args {
    config: TutorConfig,
    topic: Option<Topic>,
    difficulty: Option<Difficulty>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--api <url>] [--reveal-ms <ms>] [--toast-ms <ms>]");
    eprintln!("  cargo run -p app -- quiz [--api <url>] [--reveal-ms <ms>] [--topic <topic>] [--difficulty <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api http://localhost:8000");
    eprintln!("  --reveal-ms 5000");
    eprintln!("  --toast-ms 5000");
    eprintln!();
    eprintln!("Topics: algebra, geometry, calculus, trigonometry, statistics");
    eprintln!("Difficulties: beginner, intermediate, advanced");
    eprintln!();
    eprintln!("Environment (a .env file is read if present):");
    eprintln!("  TUTOR_API_BASE_URL, TUTOR_FEEDBACK_REVEAL_MS, TUTOR_TOAST_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Quiz,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "quiz" => Some(Self::Quiz),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        cmd: Command,
        config: TutorConfig,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            config,
            topic: None,
            difficulty: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    let value = require_value(args, "--api")?;
                    parsed.config = parsed.config.with_base_url(&value)?;
                }
                "--reveal-ms" => {
                    let value = require_value(args, "--reveal-ms")?;
                    let delay = parse_millis("--reveal-ms", &value)?;
                    parsed.config = parsed.config.with_feedback_reveal_delay(delay);
                }
                "--toast-ms" => {
                    let value = require_value(args, "--toast-ms")?;
                    let duration = parse_millis("--toast-ms", &value)?;
                    parsed.config = parsed.config.with_toast_duration(duration);
                }
                "--topic" if cmd == Command::Quiz => {
                    parsed.topic = Some(require_value(args, "--topic")?.parse()?);
                }
                "--difficulty" if cmd == Command::Quiz => {
                    parsed.difficulty = Some(require_value(args, "--difficulty")?.parse()?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = TutorConfig::from_env()
        .map_err(ArgsError::from)
        .and_then(|config| Args::parse(cmd, config, &mut iter))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    tracing::info!(
        base_url = %parsed.config.base_url(),
        reveal_delay = ?parsed.config.feedback_reveal_delay(),
        "tutor config loaded"
    );
    let api = Arc::new(HttpTutorApi::new(parsed.config.clone()));

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                api,
                config: parsed.config,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Math Tutor")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Quiz => {
            terminal::run_quiz(api, &parsed.config, parsed.topic, parsed.difficulty).await?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
