//! Date-bounded validity period with an optional end.

use super::PlanningDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive validity window.
///
/// A period without an end date is open-ended: it is current from its start
/// date onward. When an end date is present it must not precede the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<NaiveDate>,
}

impl Period {
    /// Creates a period, validating ordering when an end is given.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::EndBeforeStart`] when the end precedes
    /// the start.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, PlanningDomainError> {
        if let Some(end_date) = end
            && end_date < start
        {
            return Err(PlanningDomainError::EndBeforeStart {
                start,
                end: end_date,
            });
        }
        Ok(Self { start, end })
    }

    /// Creates an open-ended period starting at `start`.
    #[must_use]
    pub const fn open(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date, when set.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns `true` when the period has no end date.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Returns `true` when the period covers `date`.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start <= date && self.end.is_none_or(|end| end >= date)
    }

    /// Closes the period at `end`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::EndBeforeStart`] when the end precedes
    /// the start.
    pub fn close(&mut self, end: NaiveDate) -> Result<(), PlanningDomainError> {
        if end < self.start {
            return Err(PlanningDomainError::EndBeforeStart {
                start: self.start,
                end,
            });
        }
        self.end = Some(end);
        Ok(())
    }

    /// Removes the end date, making the period open-ended again.
    pub const fn reopen(&mut self) {
        self.end = None;
    }
}
