//! Statutory periods used to derive dates printed on documents

use serde::Deserialize;

use super::error::ValidationError;

/// Periods between case milestones
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TimingsConfig {
    /// Days from issue before a conditional order can be applied for
    #[serde(default = "default_holding_period_days")]
    pub holding_period_days: i64,

    /// Days from issue the respondent has to acknowledge service
    #[serde(default = "default_aos_response_days")]
    pub aos_response_days: i64,

    /// Days from conditional order before a final order can be applied for
    #[serde(default = "default_final_order_eligibility_days")]
    pub final_order_eligibility_days: i64,

    /// Months after eligibility before the respondent can apply for the final order
    #[serde(default = "default_respondent_final_order_months")]
    pub respondent_final_order_months: u32,

    /// Months after eligibility before a final order application needs an explanation
    #[serde(default = "default_final_order_no_longer_eligible_months")]
    pub final_order_no_longer_eligible_months: u32,

    /// Days before the pronouncement hearing that parties must contact the court by
    #[serde(default = "default_hearing_contact_days")]
    pub hearing_contact_days: i64,
}

fn default_holding_period_days() -> i64 {
    141
}

fn default_aos_response_days() -> i64 {
    16
}

fn default_final_order_eligibility_days() -> i64 {
    43
}

fn default_respondent_final_order_months() -> u32 {
    3
}

fn default_final_order_no_longer_eligible_months() -> u32 {
    12
}

fn default_hearing_contact_days() -> i64 {
    7
}

/// Longest period in days any timing may be configured with
pub const MAX_PERIOD_DAYS: i64 = 3650;

impl TimingsConfig {
    /// Validate timings configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_PERIOD_DAYS).contains(&self.holding_period_days) {
            return Err(ValidationError::InvalidPeriod("holding_period_days"));
        }
        if !(1..=MAX_PERIOD_DAYS).contains(&self.aos_response_days) {
            return Err(ValidationError::InvalidPeriod("aos_response_days"));
        }
        if !(1..=MAX_PERIOD_DAYS).contains(&self.final_order_eligibility_days) {
            return Err(ValidationError::InvalidPeriod("final_order_eligibility_days"));
        }
        if self.respondent_final_order_months == 0 {
            return Err(ValidationError::InvalidPeriod("respondent_final_order_months"));
        }
        if self.final_order_no_longer_eligible_months == 0 {
            return Err(ValidationError::InvalidPeriod(
                "final_order_no_longer_eligible_months",
            ));
        }
        if !(0..=MAX_PERIOD_DAYS).contains(&self.hearing_contact_days) {
            return Err(ValidationError::InvalidPeriod("hearing_contact_days"));
        }
        Ok(())
    }
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            holding_period_days: default_holding_period_days(),
            aos_response_days: default_aos_response_days(),
            final_order_eligibility_days: default_final_order_eligibility_days(),
            respondent_final_order_months: default_respondent_final_order_months(),
            final_order_no_longer_eligible_months: default_final_order_no_longer_eligible_months(),
            hearing_contact_days: default_hearing_contact_days(),
        }
    }
}
