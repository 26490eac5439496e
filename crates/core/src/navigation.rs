use serde::{Deserialize, Serialize};

/// The three screens of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Entry,
    Quiz,
    Results,
}

impl Screen {
    /// Screen to show when `requested` is asked for.
    ///
    /// - Without an identity every screen falls back to `Entry`.
    /// - `Results` is only reachable once submitted; before that it is `Quiz`.
    /// - A submitted attempt cannot go back to `Quiz`.
    #[must_use]
    pub fn resolve(requested: Screen, has_identity: bool, submitted: bool) -> Screen {
        if !has_identity {
            return Screen::Entry;
        }
        match (requested, submitted) {
            (Screen::Entry, _) => Screen::Entry,
            (Screen::Quiz | Screen::Results, true) => Screen::Results,
            (Screen::Quiz | Screen::Results, false) => Screen::Quiz,
        }
    }
}
