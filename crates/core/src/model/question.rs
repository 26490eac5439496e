use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Difficulty label attached to a trivia question.
///
/// Unknown labels are preserved in `Other` instead of failing the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Other(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Other(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION KIND ────────────────────────────────────────────────────────────
//

/// Answer format of a question: four-way multiple choice or true/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    #[default]
    Multiple,
    Boolean,
    Other(String),
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Multiple => "multiple",
            QuestionKind::Boolean => "boolean",
            QuestionKind::Other(raw) => raw,
        }
    }
}

impl From<String> for QuestionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "multiple" => Self::Multiple,
            "boolean" => Self::Boolean,
            _ => Self::Other(raw),
        }
    }
}

impl From<QuestionKind> for String {
    fn from(value: QuestionKind) -> Self {
        value.as_str().to_string()
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single trivia question as delivered by the question source.
///
/// Field names on the wire follow the Open Trivia DB record shape. Text fields
/// may still carry HTML entities; decoding is a presentation concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        difficulty: Difficulty,
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            category: category.into(),
            kind: QuestionKind::Multiple,
            difficulty,
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
        }
    }

    /// Number of answer choices (incorrect answers plus the correct one).
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }

    /// Returns true if `answer` matches the correct answer exactly.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

//
// ─── QUESTION SET ─────────────────────────────────────────────────────────────
//

/// Ordered, immutable batch of questions for one quiz attempt.
///
/// Cloning is cheap; clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Arc<[Question]>,
}

impl QuestionSet {
    /// An empty set, used before questions are loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            questions: Arc::from(Vec::new()),
        }
    }

    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::from(questions),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Returns true if `index` addresses a question in this set.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.questions.len()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
