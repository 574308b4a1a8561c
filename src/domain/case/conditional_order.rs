//! Conditional order progress.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{is_yes, LanguagePreference, YesOrNo};

/// Court a conditional order is pronounced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionalOrderCourt {
    Birmingham,
    BuryStEdmunds,
}

/// Outcome a legal adviser chose when refusing a conditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefusalOption {
    MoreInfo,
    AdminError,
    Reject,
}

/// Why more information was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClarificationReason {
    JurisdictionDetails,
    MarriageCertTranslation,
    MarriageCertificate,
    PreviousProceedingsDetails,
    Other,
}

impl ClarificationReason {
    /// Wording shown to the parties, in their language.
    pub fn label(&self, language: LanguagePreference) -> &'static str {
        match (self, language) {
            (ClarificationReason::JurisdictionDetails, LanguagePreference::English) => {
                "The court needs more detail about the connections to England and Wales."
            }
            (ClarificationReason::JurisdictionDetails, LanguagePreference::Welsh) => {
                "Mae angen rhagor o fanylion ar y llys am y cysylltiadau â Chymru a Lloegr."
            }
            (ClarificationReason::MarriageCertTranslation, LanguagePreference::English) => {
                "A certified translation of the marriage certificate is needed."
            }
            (ClarificationReason::MarriageCertTranslation, LanguagePreference::Welsh) => {
                "Mae angen cyfieithiad ardystiedig o’r dystysgrif priodas."
            }
            (ClarificationReason::MarriageCertificate, LanguagePreference::English) => {
                "A copy of the marriage certificate is needed."
            }
            (ClarificationReason::MarriageCertificate, LanguagePreference::Welsh) => {
                "Mae angen copi o’r dystysgrif priodas."
            }
            (ClarificationReason::PreviousProceedingsDetails, LanguagePreference::English) => {
                "The court needs details of previous proceedings."
            }
            (ClarificationReason::PreviousProceedingsDetails, LanguagePreference::Welsh) => {
                "Mae angen manylion am achosion blaenorol ar y llys."
            }
            (ClarificationReason::Other, LanguagePreference::English) => {
                "The court needs more information."
            }
            (ClarificationReason::Other, LanguagePreference::Welsh) => {
                "Mae angen rhagor o wybodaeth ar y llys."
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionalOrder {
    pub date_submitted: Option<NaiveDate>,
    pub granted_date: Option<NaiveDate>,
    pub decision_date: Option<NaiveDate>,
    pub court: Option<ConditionalOrderCourt>,
    pub date_and_time_of_hearing: Option<NaiveDateTime>,
    pub claims_granted: Option<YesOrNo>,
    pub claims_costs_order_information: Option<String>,
    pub refusal_decision: Option<RefusalOption>,
    pub refusal_clarification_reasons: BTreeSet<ClarificationReason>,
    pub refusal_clarification_additional_info: Option<String>,
    pub refusal_rejection_additional_info: Option<String>,
    pub refusal_admin_error_info: Option<String>,
}

impl ConditionalOrder {
    pub fn costs_granted(&self) -> bool {
        is_yes(self.claims_granted)
    }

    /// Date of the pronouncement hearing, when listed.
    pub fn hearing_date(&self) -> Option<NaiveDate> {
        self.date_and_time_of_hearing.map(|dt| dt.date())
    }

    /// True when the refusal asks for clarification rather than an amended application.
    pub fn is_clarification(&self) -> bool {
        matches!(self.refusal_decision, Some(RefusalOption::MoreInfo))
    }

    pub fn is_amended_application(&self) -> bool {
        matches!(self.refusal_decision, Some(RefusalOption::Reject))
    }

    /// Comments shown to the parties on a refusal, in display order.
    ///
    /// Reasons come first, in `language`, then any free-text information for
    /// the chosen outcome as it was typed.
    pub fn legal_adviser_comments(&self, language: LanguagePreference) -> Vec<String> {
        let mut comments: Vec<String> = Vec::new();
        let free_text = match self.refusal_decision {
            Some(RefusalOption::MoreInfo) => {
                comments.extend(
                    self.refusal_clarification_reasons
                        .iter()
                        .map(|reason| reason.label(language).to_string()),
                );
                self.refusal_clarification_additional_info.as_deref()
            }
            Some(RefusalOption::Reject) => self.refusal_rejection_additional_info.as_deref(),
            Some(RefusalOption::AdminError) => self.refusal_admin_error_info.as_deref(),
            None => None,
        };
        if let Some(text) = free_text.map(str::trim).filter(|t| !t.is_empty()) {
            comments.push(text.to_string());
        }
        comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clarification_comments_list_reasons_then_free_text() {
        let co = ConditionalOrder {
            refusal_decision: Some(RefusalOption::MoreInfo),
            refusal_clarification_reasons: [
                ClarificationReason::MarriageCertificate,
                ClarificationReason::JurisdictionDetails,
            ]
            .into_iter()
            .collect(),
            refusal_clarification_additional_info: Some("Please send the original.".into()),
            ..Default::default()
        };
        assert_eq!(
            co.legal_adviser_comments(LanguagePreference::English),
            vec![
                "The court needs more detail about the connections to England and Wales.",
                "A copy of the marriage certificate is needed.",
                "Please send the original.",
            ]
        );
    }

    #[test]
    fn clarification_reasons_follow_language() {
        let co = ConditionalOrder {
            refusal_decision: Some(RefusalOption::MoreInfo),
            refusal_clarification_reasons: [ClarificationReason::MarriageCertificate]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        assert_eq!(
            co.legal_adviser_comments(LanguagePreference::Welsh),
            vec!["Mae angen copi o’r dystysgrif priodas."]
        );
    }

    #[test]
    fn every_reason_is_translated() {
        for reason in [
            ClarificationReason::JurisdictionDetails,
            ClarificationReason::MarriageCertTranslation,
            ClarificationReason::MarriageCertificate,
            ClarificationReason::PreviousProceedingsDetails,
            ClarificationReason::Other,
        ] {
            assert_ne!(
                reason.label(LanguagePreference::English),
                reason.label(LanguagePreference::Welsh)
            );
        }
    }

    #[test]
    fn rejection_ignores_clarification_reasons() {
        let co = ConditionalOrder {
            refusal_decision: Some(RefusalOption::Reject),
            refusal_clarification_reasons: [ClarificationReason::Other].into_iter().collect(),
            refusal_rejection_additional_info: Some("Amend the statement of case.".into()),
            ..Default::default()
        };
        assert_eq!(
            co.legal_adviser_comments(LanguagePreference::English),
            vec!["Amend the statement of case."]
        );
        assert!(co.is_amended_application());
        assert!(!co.is_clarification());
    }

    #[test]
    fn no_decision_means_no_comments() {
        assert!(ConditionalOrder::default()
            .legal_adviser_comments(LanguagePreference::Welsh)
            .is_empty());
    }

    #[test]
    fn hearing_date_drops_time() {
        let co = ConditionalOrder {
            date_and_time_of_hearing: Some(
                NaiveDate::from_ymd_opt(2022, 5, 10)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap(),
            ),
            ..Default::default()
        };
        assert_eq!(co.hearing_date(), NaiveDate::from_ymd_opt(2022, 5, 10));
    }
}
