//! Domain entities.

mod presence_record;

pub use presence_record::{MonthlyPresenceRecord, PresenceEntries, PresenceEntry};
