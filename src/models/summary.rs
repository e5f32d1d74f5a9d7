use serde::Serialize;

/// Counts shown above the calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub running: usize,
}
