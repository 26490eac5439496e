use quiz_core::model::ScoreBand;
use quiz_core::time::format_clock;
use services::SessionSnapshot;

use crate::vm::text::decode_entities;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultDetailVm {
    pub number: usize,
    pub text: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ResultDetailVm {
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.is_correct { "Correct" } else { "Incorrect" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percentage_label: String,
    pub band_class: &'static str,
    pub time_spent: String,
    pub email: String,
    pub details: Vec<ResultDetailVm>,
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "score score-excellent",
        ScoreBand::Good => "score score-good",
        ScoreBand::Fair => "score score-fair",
        ScoreBand::Poor => "score score-poor",
    }
}

/// Results screen contents, or `None` while the quiz is still running.
#[must_use]
pub fn map_results(snapshot: &SessionSnapshot) -> Option<ResultsVm> {
    let results = snapshot.results()?;
    let questions = snapshot.questions();

    let details = results
        .outcomes()
        .iter()
        .filter_map(|outcome| {
            let question = questions.get(outcome.index)?;
            Some(ResultDetailVm {
                number: outcome.index + 1,
                text: decode_entities(&question.text),
                user_answer: outcome.user_answer.as_deref().map(decode_entities),
                correct_answer: decode_entities(&outcome.correct_answer),
                is_correct: outcome.is_correct,
            })
        })
        .collect();

    Some(ResultsVm {
        score_label: format!("{}/{}", results.score(), results.total()),
        percentage_label: format!("{}% Correct", results.percentage()),
        band_class: band_class(results.band()),
        time_spent: format_clock(results.time_spent_secs()),
        email: snapshot
            .identity()
            .map(|identity| identity.email().to_string())
            .unwrap_or_default(),
        details,
    })
}
