use std::collections::HashMap;

use rand::Rng;

use quiz_core::model::Question;

/// Answer choices for `question` in a uniformly random order.
///
/// Fisher–Yates over a copy of the incorrect answers followed by the correct
/// one. The question itself is left untouched.
#[must_use]
pub fn shuffle_choices<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut choices: Vec<String> = question
        .incorrect_answers
        .iter()
        .cloned()
        .chain(std::iter::once(question.correct_answer.clone()))
        .collect();

    for i in (1..choices.len()).rev() {
        let j = rng.random_range(0..=i);
        choices.swap(i, j);
    }
    choices
}

#[derive(Debug, Clone)]
struct CachedChoices {
    question: Question,
    choices: Vec<String>,
}

/// One stable choice order per question position.
///
/// The order is shuffled the first time a position is asked for and reused
/// until a different question shows up at that position.
#[derive(Debug, Clone, Default)]
pub struct ChoiceCache {
    entries: HashMap<usize, CachedChoices>,
}

impl ChoiceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choices_for<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        question: &Question,
        rng: &mut R,
    ) -> &[String] {
        let stale = self
            .entries
            .get(&index)
            .is_none_or(|cached| cached.question != *question);
        if stale {
            self.entries.insert(
                index,
                CachedChoices {
                    question: question.clone(),
                    choices: shuffle_choices(question, rng),
                },
            );
        }
        self.entries
            .get(&index)
            .map(|cached| cached.choices.as_slice())
            .unwrap_or_default()
    }

    /// Choice orders for every question in `questions`, by position.
    pub fn fill<'a, R, I>(&mut self, questions: I, rng: &mut R) -> Vec<Vec<String>>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Question>,
    {
        questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| self.choices_for(index, question, &mut *rng).to_vec())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
