mod entry;
mod quiz;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use entry::EntryView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, run_action, use_screen_guard, use_session_snapshot};
