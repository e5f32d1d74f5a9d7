pub mod duration;
pub mod event;
pub mod slot;
pub mod summary;

pub use duration::EventDuration;
pub use event::{Event, EventFilter};
pub use slot::{SlotState, SlotStatus, TimeSlot};
pub use summary::Summary;
