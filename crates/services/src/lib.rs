#![forbid(unsafe_code)]

pub mod choices;
pub mod config;
pub mod error;
pub mod question_source;
pub mod sessions;
pub mod timer;

pub use choices::{ChoiceCache, shuffle_choices};
pub use config::QuizConfig;
pub use error::{ConfigError, FetchError, SessionError};
pub use question_source::{OpenTriviaSource, QuestionSource, StaticQuestionSource};
pub use timer::TimerDriver;

pub use sessions::{Notice, SessionHandle, SessionProgress, SessionSnapshot, spawn_session};
