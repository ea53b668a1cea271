// Declare modules
pub mod draft;
pub mod entry;
pub mod event;
pub mod holiday;
pub mod participant;

// Re-export all public types so imports like `use crate::models::Event` work
// without spelling out the submodule.
pub use draft::EventDraft;
pub use entry::CalendarEntry;
pub use event::{Event, Priority};
pub use holiday::Holiday;
pub use participant::Participant;
