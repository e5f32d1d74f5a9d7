use crate::models::event::Event;
use crate::models::summary::Summary;

pub fn summarize(events: &[Event]) -> Summary {
    let total = events.len();
    let completed = events.iter().filter(|e| e.is_completed()).count();

    Summary {
        total,
        completed,
        running: total - completed,
    }
}
