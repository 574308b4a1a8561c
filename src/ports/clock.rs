//! Clock Port - source of "today" for date-dependent content.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
///
/// Letters print the date they were produced, and several mappers derive
/// deadlines from it. Injecting the clock keeps those outputs reproducible.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// The current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
