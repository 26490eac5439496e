mod quiz_vm;
mod results_vm;
mod text;

pub use quiz_vm::{
    ChoiceVm, OverviewCellVm, QuestionVm, QuizVm, TimerVm, map_quiz, map_timer,
};
pub use results_vm::{ResultDetailVm, ResultsVm, map_results};
pub use text::{choice_letter, decode_entities, display_category};
