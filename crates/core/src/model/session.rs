use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::time::DEFAULT_TIME_LIMIT_SECS;

/// Display status of a single question in the overview grid.
///
/// When several apply, the first one listed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionStatus {
    Current,
    Answered,
    Visited,
    NotVisited,
}

impl QuestionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionStatus::Current => "Current",
            QuestionStatus::Answered => "Answered",
            QuestionStatus::Visited => "Visited",
            QuestionStatus::NotVisited => "Not Visited",
        }
    }
}

/// Mutable state of one quiz attempt.
///
/// Invariants:
/// - `current_index` is always in `visited`.
/// - once `submitted` is set, nothing else changes until the session is replaced.
///
/// Mutation goes through [`crate::QuizController`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    current_index: usize,
    answers: BTreeMap<usize, String>,
    visited: BTreeSet<usize>,
    time_limit_secs: u32,
    time_remaining_secs: u32,
    submitted: bool,
}

impl QuizSession {
    /// Fresh attempt positioned on the first question with the full time budget.
    #[must_use]
    pub fn new(time_limit_secs: u32) -> Self {
        Self {
            current_index: 0,
            answers: BTreeMap::new(),
            visited: BTreeSet::from([0]),
            time_limit_secs,
            time_remaining_secs: time_limit_secs,
            submitted: false,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    #[must_use]
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn time_remaining_secs(&self) -> u32 {
        self.time_remaining_secs
    }

    /// Seconds consumed so far (or at submission, once submitted).
    #[must_use]
    pub fn time_spent_secs(&self) -> u32 {
        self.time_limit_secs.saturating_sub(self.time_remaining_secs)
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[must_use]
    pub fn status_of(&self, index: usize) -> QuestionStatus {
        if index == self.current_index {
            QuestionStatus::Current
        } else if self.answers.contains_key(&index) {
            QuestionStatus::Answered
        } else if self.visited.contains(&index) {
            QuestionStatus::Visited
        } else {
            QuestionStatus::NotVisited
        }
    }

    pub(crate) fn visit(&mut self, index: usize) {
        self.current_index = index;
        self.visited.insert(index);
    }

    pub(crate) fn record(&mut self, index: usize, answer: String) {
        self.answers.insert(index, answer);
    }

    pub(crate) fn set_time_remaining(&mut self, secs: u32) {
        self.time_remaining_secs = secs;
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.submitted = true;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_on_first_question() {
        let session = QuizSession::default();

        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.visited(), &BTreeSet::from([0]));
        assert_eq!(session.time_remaining_secs(), 1800);
        assert_eq!(session.time_spent_secs(), 0);
        assert!(!session.is_submitted());
    }

    #[test]
    fn status_precedence_is_current_answered_visited() {
        let mut session = QuizSession::new(60);
        session.visit(2);
        session.record(2, "A".into());
        session.visit(1);
        session.record(3, "B".into());

        assert_eq!(session.status_of(1), QuestionStatus::Current);
        assert_eq!(session.status_of(2), QuestionStatus::Answered);
        assert_eq!(session.status_of(3), QuestionStatus::Answered);
        assert_eq!(session.status_of(0), QuestionStatus::Visited);
        assert_eq!(session.status_of(4), QuestionStatus::NotVisited);
        assert_eq!(session.answered_count(), 2);
        assert_eq!(session.visited_count(), 3);
    }

    #[test]
    fn time_spent_is_limit_minus_remaining() {
        let mut session = QuizSession::new(10);
        session.set_time_remaining(4);
        assert_eq!(session.time_spent_secs(), 6);
        session.set_time_remaining(25);
        assert_eq!(session.time_spent_secs(), 0);
    }
}
