mod identity;
mod question;
mod results;
mod session;

pub use identity::{IdentityError, UserIdentity};
pub use question::{Difficulty, Question, QuestionKind, QuestionSet};
pub use results::{QuestionOutcome, QuizResults, ScoreBand};
pub use session::{QuestionStatus, QuizSession};
