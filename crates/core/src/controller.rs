use thiserror::Error;

use crate::model::{Question, QuestionSet, QuizSession, UserIdentity};
use crate::navigation::Screen;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Caller contract violations on the quiz controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question index {index} is out of range (question count {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

//
// ─── OPERATION RESULTS ────────────────────────────────────────────────────────
//

/// Whether a controller operation changed state.
///
/// `Ignored` is not an error: it covers calls that arrive after submission,
/// duplicate loads and similar benign races.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Direction for the clamped previous/next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Result of one countdown interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStep {
    /// The countdown moved to the given remaining seconds and keeps running.
    Continue(u32),
    /// Time ran out on this interval; the quiz has just been submitted.
    Expired,
    /// The quiz was already submitted; the driver must stop without ticking.
    Stopped,
}

impl TimerStep {
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, TimerStep::Continue(_))
    }
}

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

/// Owns everything that makes up one quiz attempt and applies every mutation.
///
/// Operations after submission are ignored. `reset` is the only way back to a
/// clean slate and is allowed at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizController {
    time_limit_secs: u32,
    questions: QuestionSet,
    session: QuizSession,
    identity: Option<UserIdentity>,
}

impl QuizController {
    #[must_use]
    pub fn new(time_limit_secs: u32) -> Self {
        Self {
            time_limit_secs,
            questions: QuestionSet::empty(),
            session: QuizSession::new(time_limit_secs),
            identity: None,
        }
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.questions.is_empty()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.session.is_submitted()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current_index())
    }

    /// Screen the user should see when asking for `requested`.
    #[must_use]
    pub fn screen_for(&self, requested: Screen) -> Screen {
        Screen::resolve(requested, self.identity.is_some(), self.is_submitted())
    }

    /// Set the identity and start a fresh attempt.
    ///
    /// Ignored while an identity is already set; `reset` clears it.
    pub fn begin(&mut self, identity: UserIdentity) -> Outcome {
        if self.identity.is_some() {
            return Outcome::Ignored;
        }
        self.identity = Some(identity);
        self.session = QuizSession::new(self.time_limit_secs);
        Outcome::Applied
    }

    /// Install the question batch for this attempt.
    ///
    /// Ignored when a batch is already installed or `questions` is empty.
    pub fn load_questions(&mut self, questions: Vec<Question>) -> Outcome {
        if self.is_loaded() || questions.is_empty() {
            return Outcome::Ignored;
        }
        self.questions = QuestionSet::new(questions);
        Outcome::Applied
    }

    /// Move to `index` and mark it visited.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::IndexOutOfRange` if `index` is not a loaded question.
    /// Nothing is changed in that case.
    pub fn navigate_to(&mut self, index: usize) -> Result<Outcome, QuizError> {
        if self.is_submitted() {
            return Ok(Outcome::Ignored);
        }
        self.check_index(index)?;
        self.session.visit(index);
        Ok(Outcome::Applied)
    }

    /// Move one question back or forward, clamped to the loaded range.
    ///
    /// A step that the clamp turns into a no-op is `Ignored`.
    pub fn step(&mut self, direction: Direction) -> Outcome {
        let len = self.questions.len();
        if len == 0 {
            return Outcome::Ignored;
        }
        let current = self.session.current_index();
        let target = match direction {
            Direction::Previous => current.saturating_sub(1),
            Direction::Next => (current + 1).min(len - 1),
        };
        if target == current {
            return Outcome::Ignored;
        }
        self.navigate_to(target).unwrap_or(Outcome::Ignored)
    }

    /// Record `answer` for `index`, replacing any earlier answer.
    ///
    /// Does not mark `index` visited.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::IndexOutOfRange` if `index` is not a loaded question.
    pub fn record_answer(
        &mut self,
        index: usize,
        answer: impl Into<String>,
    ) -> Result<Outcome, QuizError> {
        if self.is_submitted() {
            return Ok(Outcome::Ignored);
        }
        self.check_index(index)?;
        self.session.record(index, answer.into());
        Ok(Outcome::Applied)
    }

    /// Set the remaining seconds. The caller owns the countdown direction.
    pub fn tick(&mut self, remaining_secs: u32) -> Outcome {
        if self.is_submitted() {
            return Outcome::Ignored;
        }
        self.session.set_time_remaining(remaining_secs);
        Outcome::Applied
    }

    /// Freeze the attempt. Calling it again has no effect.
    pub fn submit(&mut self) -> Outcome {
        if self.is_submitted() {
            return Outcome::Ignored;
        }
        self.session.mark_submitted();
        Outcome::Applied
    }

    /// Abandon everything: fresh session, no questions, no identity.
    pub fn reset(&mut self) {
        self.session = QuizSession::new(self.time_limit_secs);
        self.questions = QuestionSet::empty();
        self.identity = None;
    }

    /// Apply one countdown interval.
    ///
    /// At one second or less the quiz is submitted instead of ticked.
    pub fn on_timer_elapsed(&mut self) -> TimerStep {
        if self.is_submitted() {
            return TimerStep::Stopped;
        }
        let remaining = self.session.time_remaining_secs();
        if remaining <= 1 {
            let _ = self.submit();
            return TimerStep::Expired;
        }
        let next = remaining - 1;
        let _ = self.tick(next);
        TimerStep::Continue(next)
    }

    fn check_index(&self, index: usize) -> Result<(), QuizError> {
        if self.questions.contains_index(index) {
            Ok(())
        } else {
            Err(QuizError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            })
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
