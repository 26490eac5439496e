use std::sync::Arc;

use quiz_core::{QuizController, Screen};
use quiz_core::model::{Question, QuestionSet, QuizResults, QuizSession, UserIdentity};

use super::progress::SessionProgress;

/// Blocking message the presentation layer must show the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoadFailed,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Notice::LoadFailed => "Failed to load quiz questions. Please try again.",
        }
    }
}

/// Read-only copy of the session runtime state, published after every change.
///
/// Presentation-agnostic: no formatted strings, no decoded entities.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    questions: QuestionSet,
    session: QuizSession,
    identity: Option<UserIdentity>,
    choices: Arc<[Vec<String>]>,
    loading: bool,
    notice: Option<Notice>,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        controller: &QuizController,
        choices: Arc<[Vec<String>]>,
        loading: bool,
        notice: Option<Notice>,
    ) -> Self {
        Self {
            questions: controller.questions().clone(),
            session: controller.session().clone(),
            identity: controller.identity().cloned(),
            choices,
            loading,
            notice,
        }
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

    /// Stable choice order for the question at `index`.
    #[must_use]
    pub fn choices(&self, index: usize) -> &[String] {
        self.choices.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
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
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current_index())
    }

    /// Screen to show when `requested` is asked for.
    #[must_use]
    pub fn screen_for(&self, requested: Screen) -> Screen {
        Screen::resolve(requested, self.identity.is_some(), self.is_submitted())
    }

    /// Scored results, available once the quiz is submitted.
    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        self.is_submitted()
            .then(|| QuizResults::calculate(&self.questions, &self.session))
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.questions.len();
        let current = self.session.current_index();
        SessionProgress {
            total,
            answered: self.session.answered_count(),
            visited: self.session.visited_count(),
            current,
            is_first: current == 0,
            is_last: total == 0 || current + 1 >= total,
            is_submitted: self.is_submitted(),
        }
    }
}
