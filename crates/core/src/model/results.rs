use serde::{Deserialize, Serialize};

use crate::model::{QuestionSet, QuizSession};

/// Coarse grading of a percentage score, used for colouring results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    /// 80% and above.
    Excellent,
    /// 60% to 79%.
    Good,
    /// 40% to 59%.
    Fair,
    /// Below 40%.
    Poor,
}

impl ScoreBand {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

/// Outcome for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub index: usize,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Read-only projection of a quiz attempt.
///
/// Recomputed on demand from the question set and session; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    outcomes: Vec<QuestionOutcome>,
    score: usize,
    percentage: u32,
    time_spent_secs: u32,
}

impl QuizResults {
    /// Score every question in `questions` against the answers in `session`.
    ///
    /// Unanswered questions count as incorrect. An empty set scores 0%.
    #[must_use]
    pub fn calculate(questions: &QuestionSet, session: &QuizSession) -> Self {
        let outcomes: Vec<_> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let user_answer = session.answer(index).map(str::to_string);
                let is_correct = user_answer
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer));
                QuestionOutcome {
                    index,
                    user_answer,
                    correct_answer: question.correct_answer.clone(),
                    is_correct,
                }
            })
            .collect();

        let score = outcomes.iter().filter(|outcome| outcome.is_correct).count();

        Self {
            percentage: percentage(score, outcomes.len()),
            outcomes,
            score,
            time_spent_secs: session.time_spent_secs(),
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage)
    }

    #[must_use]
    pub fn time_spent_secs(&self) -> u32 {
        self.time_spent_secs
    }
}

// Round half away from zero, matching `Math.round` for non-negative input.
fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
