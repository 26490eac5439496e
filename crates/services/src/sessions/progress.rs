/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub visited: usize,
    pub current: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub is_submitted: bool,
}
