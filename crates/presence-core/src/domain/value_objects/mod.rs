//! Value objects for the presence domain.

mod day;
mod presence_kind;
mod year_month;

pub use day::{DayOfMonth, PresenceDate};
pub use presence_kind::PresenceKind;
pub use year_month::{YearMonth, MAX_YEAR, MIN_YEAR};
