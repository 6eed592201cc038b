use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use quiz_core::model::QuizType;
use services::{ApiConfig, HttpQuizBackend, QuizBackend, RestartPolicy};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiBase { raw: String },
    InvalidQuizType { raw: String },
    InvalidQuestionCount { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiBase { raw } => write!(f, "invalid --api-base value: {raw}"),
            ArgsError::InvalidQuizType { raw } => write!(f, "invalid --quiz-type value: {raw}"),
            ArgsError::InvalidQuestionCount { raw } => {
                write!(f, "invalid --questions value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    backend: Arc<dyn QuizBackend>,
    restart_policy: RestartPolicy,
    default_question_count: u32,
    default_quiz_type: Option<QuizType>,
}

impl UiApp for DesktopApp {
    fn backend(&self) -> Arc<dyn QuizBackend> {
        Arc::clone(&self.backend)
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn restart_policy(&self) -> RestartPolicy {
        self.restart_policy
    }

    fn default_question_count(&self) -> u32 {
        self.default_question_count
    }

    fn default_quiz_type(&self) -> Option<QuizType> {
        self.default_quiz_type
    }
}

struct Args {
    api_base: String,
    restart_policy: RestartPolicy,
    default_question_count: u32,
    default_quiz_type: Option<QuizType>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-base <url>] [--questions <n>]");
    eprintln!("                      [--quiz-type <open-ended|mcqs|true-false>]");
    eprintln!("                      [--keep-document | --clear-document]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-base {}", services::DEFAULT_API_BASE);
    eprintln!("  --questions 5");
    eprintln!("  --keep-document");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DOCQUIZ_API_BASE, DOCQUIZ_QUESTIONS, DOCQUIZ_QUIZ_TYPE, DOCQUIZ_KEEP_DOCUMENT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_base = std::env::var("DOCQUIZ_API_BASE")
            .unwrap_or_else(|_| services::DEFAULT_API_BASE.to_string());
        let mut restart_policy = match std::env::var("DOCQUIZ_KEEP_DOCUMENT").ok().as_deref() {
            Some("0" | "false" | "no") => RestartPolicy::ClearDocument,
            _ => RestartPolicy::KeepDocument,
        };
        let mut default_question_count = std::env::var("DOCQUIZ_QUESTIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|count| *count > 0)
            .unwrap_or(5);
        let mut default_quiz_type = match std::env::var("DOCQUIZ_QUIZ_TYPE") {
            Ok(raw) => Some(
                raw.parse::<QuizType>()
                    .map_err(|_| ArgsError::InvalidQuizType { raw })?,
            ),
            Err(_) => None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-base" => {
                    let value = require_value(args, "--api-base")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiBase { raw: value });
                    }
                    api_base = value;
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    default_question_count = value
                        .parse::<u32>()
                        .ok()
                        .filter(|count| *count > 0)
                        .ok_or(ArgsError::InvalidQuestionCount { raw: value })?;
                }
                "--quiz-type" => {
                    let value = require_value(args, "--quiz-type")?;
                    default_quiz_type = Some(
                        value
                            .parse::<QuizType>()
                            .map_err(|_| ArgsError::InvalidQuizType { raw: value })?,
                    );
                }
                "--keep-document" => restart_policy = RestartPolicy::KeepDocument,
                "--clear-document" => restart_policy = RestartPolicy::ClearDocument,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_base,
            restart_policy,
            default_question_count,
            default_quiz_type,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Validate the base URL once at startup so a typo fails here, not on the
    // first upload.
    let config = ApiConfig::new(&parsed.api_base).map_err(|_| ArgsError::InvalidApiBase {
        raw: parsed.api_base.clone(),
    })?;
    let backend: Arc<dyn QuizBackend> = Arc::new(HttpQuizBackend::new(config));

    let app = DesktopApp {
        backend,
        restart_policy: parsed.restart_policy,
        default_question_count: parsed.default_question_count,
        default_quiz_type: parsed.default_quiz_type,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("DocQuiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
