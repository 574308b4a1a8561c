//! Derived deadlines: when each step of the process becomes possible.

use chrono::{Duration, Months, NaiveDate};

use crate::config::TimingsConfig;

/// Computes milestone dates from configured statutory periods.
#[derive(Debug, Clone, Default)]
pub struct HoldingPeriodService {
    timings: TimingsConfig,
}

impl HoldingPeriodService {
    pub fn new(timings: TimingsConfig) -> Self {
        Self { timings }
    }

    /// Earliest date a conditional order can be applied for.
    pub fn due_date_for(&self, issue_date: NaiveDate) -> NaiveDate {
        add_days(issue_date, self.timings.holding_period_days)
    }

    /// Date the respondent must acknowledge service by.
    pub fn aos_due_date(&self, issue_date: NaiveDate) -> NaiveDate {
        add_days(issue_date, self.timings.aos_response_days)
    }

    pub fn final_order_eligible_from(&self, conditional_order_granted: NaiveDate) -> NaiveDate {
        add_days(
            conditional_order_granted,
            self.timings.final_order_eligibility_days,
        )
    }

    pub fn respondent_can_apply_from(&self, eligible_from: NaiveDate) -> NaiveDate {
        add_months(eligible_from, self.timings.respondent_final_order_months)
    }

    /// After this date a late final order application needs an explanation.
    pub fn final_order_no_longer_eligible(&self, eligible_from: NaiveDate) -> NaiveDate {
        add_months(eligible_from, self.timings.final_order_no_longer_eligible_months)
    }

    /// Date parties must contact the court by if they cannot attend the hearing.
    pub fn hearing_contact_deadline(&self, hearing_date: NaiveDate) -> NaiveDate {
        add_days(hearing_date, self.timings.hearing_contact_days.saturating_neg())
    }
}

/// Saturates at the calendar bounds instead of overflowing.
fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|duration| date.checked_add_signed(duration))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
