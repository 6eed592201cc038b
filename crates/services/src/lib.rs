#![forbid(unsafe_code)]

pub mod api;
pub mod backend;
pub mod error;
pub mod runner;
pub mod session;

pub use quiz_core::Clock;

pub use api::{ApiConfig, DEFAULT_API_BASE, HttpQuizBackend};
pub use backend::QuizBackend;
pub use error::{ApiError, SessionError};
pub use runner::{QuizRunner, RunnerStep};
pub use session::{QuizSession, RestartPolicy, Stage};
