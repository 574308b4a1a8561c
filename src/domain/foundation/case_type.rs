//! Case classification enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the case ends a marriage or a civil partnership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DivorceOrDissolution {
    #[default]
    Divorce,
    Dissolution,
}

impl DivorceOrDissolution {
    pub fn is_divorce(&self) -> bool {
        matches!(self, DivorceOrDissolution::Divorce)
    }
}

/// Sole or joint application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationType {
    #[default]
    SoleApplication,
    JointApplication,
}

impl ApplicationType {
    pub fn is_sole(&self) -> bool {
        matches!(self, ApplicationType::SoleApplication)
    }
}

/// Separation variants layered on top of a divorce or dissolution case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplementaryCaseType {
    #[default]
    NotApplicable,
    JudicialSeparation,
    Separation,
}

impl SupplementaryCaseType {
    /// True for either separation variant.
    pub fn is_separation(&self) -> bool {
        !matches!(self, SupplementaryCaseType::NotApplicable)
    }
}

/// The four kinds of proceedings a case can be, used to pick vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    Divorce,
    Dissolution,
    JudicialSeparation,
    Separation,
}

impl CaseKind {
    /// Collapses the two case flags into one kind.
    ///
    /// A separation of a marriage is a judicial separation; a separation of
    /// a civil partnership is a separation, whichever supplementary flag was
    /// recorded.
    pub fn from_flags(
        divorce_or_dissolution: DivorceOrDissolution,
        supplementary: SupplementaryCaseType,
    ) -> Self {
        match (divorce_or_dissolution, supplementary.is_separation()) {
            (DivorceOrDissolution::Divorce, false) => CaseKind::Divorce,
            (DivorceOrDissolution::Dissolution, false) => CaseKind::Dissolution,
            (DivorceOrDissolution::Divorce, true) => CaseKind::JudicialSeparation,
            (DivorceOrDissolution::Dissolution, true) => CaseKind::Separation,
        }
    }

    /// Returns all kinds.
    pub fn all() -> &'static [CaseKind] {
        &[
            CaseKind::Divorce,
            CaseKind::Dissolution,
            CaseKind::JudicialSeparation,
            CaseKind::Separation,
        ]
    }

    /// True when the relationship is a marriage.
    pub fn is_marriage(&self) -> bool {
        matches!(self, CaseKind::Divorce | CaseKind::JudicialSeparation)
    }

    /// True for either separation kind.
    pub fn is_separation(&self) -> bool {
        matches!(self, CaseKind::JudicialSeparation | CaseKind::Separation)
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseKind::Divorce => "divorce",
            CaseKind::Dissolution => "dissolution",
            CaseKind::JudicialSeparation => "judicial_separation",
            CaseKind::Separation => "separation",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cases_map_directly() {
        assert_eq!(
            CaseKind::from_flags(
                DivorceOrDissolution::Divorce,
                SupplementaryCaseType::NotApplicable
            ),
            CaseKind::Divorce
        );
        assert_eq!(
            CaseKind::from_flags(
                DivorceOrDissolution::Dissolution,
                SupplementaryCaseType::NotApplicable
            ),
            CaseKind::Dissolution
        );
    }

    #[test]
    fn separation_follows_relationship_type() {
        assert_eq!(
            CaseKind::from_flags(DivorceOrDissolution::Divorce, SupplementaryCaseType::Separation),
            CaseKind::JudicialSeparation
        );
        assert_eq!(
            CaseKind::from_flags(
                DivorceOrDissolution::Dissolution,
                SupplementaryCaseType::JudicialSeparation
            ),
            CaseKind::Separation
        );
    }

    #[test]
    fn marriage_kinds() {
        assert!(CaseKind::Divorce.is_marriage());
        assert!(CaseKind::JudicialSeparation.is_marriage());
        assert!(!CaseKind::Dissolution.is_marriage());
        assert!(!CaseKind::Separation.is_marriage());
    }

    #[test]
    fn deserializes_platform_spelling() {
        let kind: ApplicationType = serde_json::from_str("\"jointApplication\"").unwrap();
        assert_eq!(kind, ApplicationType::JointApplication);

        let supplementary: SupplementaryCaseType =
            serde_json::from_str("\"judicialSeparation\"").unwrap();
        assert!(supplementary.is_separation());
    }
}
