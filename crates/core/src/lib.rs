#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod model;
pub mod navigation;
pub mod time;

pub use controller::{Direction, Outcome, QuizController, QuizError, TimerStep};
pub use error::Error;
pub use navigation::Screen;
