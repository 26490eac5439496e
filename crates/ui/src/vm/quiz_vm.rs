use quiz_core::model::{Difficulty, QuestionStatus};
use quiz_core::time::{TimerUrgency, format_clock};
use services::SessionSnapshot;

use crate::vm::text::{choice_letter, decode_entities, display_category};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub letter: char,
    /// Raw answer as it is recorded and scored.
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub category: String,
    pub difficulty_label: String,
    pub difficulty_class: &'static str,
    pub text: String,
    pub choices: Vec<ChoiceVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewCellVm {
    pub index: usize,
    pub number: usize,
    pub status: QuestionStatus,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub label: String,
    pub urgency_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question: QuestionVm,
    pub overview: Vec<OverviewCellVm>,
    pub timer: TimerVm,
    pub position_label: String,
    pub can_go_back: bool,
    pub is_last: bool,
    pub answered: usize,
    pub total: usize,
}

#[must_use]
pub fn map_timer(remaining_secs: u32) -> TimerVm {
    TimerVm {
        label: format_clock(remaining_secs),
        urgency_class: match TimerUrgency::from_remaining(remaining_secs) {
            TimerUrgency::Normal => "timer",
            TimerUrgency::Warning => "timer timer-warning",
            TimerUrgency::Critical => "timer timer-critical",
        },
    }
}

fn difficulty_class(difficulty: &Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty difficulty-easy",
        Difficulty::Medium => "difficulty difficulty-medium",
        Difficulty::Hard => "difficulty difficulty-hard",
        Difficulty::Other(_) => "difficulty difficulty-other",
    }
}

fn status_class(status: QuestionStatus) -> &'static str {
    match status {
        QuestionStatus::Current => "overview-cell status-current",
        QuestionStatus::Answered => "overview-cell status-answered",
        QuestionStatus::Visited => "overview-cell status-visited",
        QuestionStatus::NotVisited => "overview-cell status-not-visited",
    }
}

/// Everything the quiz screen renders, or `None` until questions are loaded.
#[must_use]
pub fn map_quiz(snapshot: &SessionSnapshot) -> Option<QuizVm> {
    let question = snapshot.current_question()?;
    let session = snapshot.session();
    let index = session.current_index();
    let selected = session.answer(index);
    let progress = snapshot.progress();

    let choices = snapshot
        .choices(index)
        .iter()
        .enumerate()
        .map(|(position, choice)| ChoiceVm {
            letter: choice_letter(position),
            value: choice.clone(),
            label: decode_entities(choice),
            selected: selected == Some(choice.as_str()),
        })
        .collect();

    let overview = (0..progress.total)
        .map(|cell| {
            let status = session.status_of(cell);
            OverviewCellVm {
                index: cell,
                number: cell + 1,
                status,
                class: status_class(status),
            }
        })
        .collect();

    Some(QuizVm {
        question: QuestionVm {
            index,
            category: display_category(&question.category),
            difficulty_label: question.difficulty.as_str().to_uppercase(),
            difficulty_class: difficulty_class(&question.difficulty),
            text: decode_entities(&question.text),
            choices,
        },
        overview,
        timer: map_timer(session.time_remaining_secs()),
        position_label: format!("{} of {}", index + 1, progress.total),
        can_go_back: !progress.is_first,
        is_last: progress.is_last,
        answered: progress.answered,
        total: progress.total,
    })
}
