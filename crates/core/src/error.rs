use thiserror::Error;

use crate::controller::QuizError;
use crate::model::IdentityError;

/// Any rejection raised by the quiz domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
