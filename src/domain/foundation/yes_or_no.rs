//! YesOrNo answer as stored by the case-management platform.

use serde::{Deserialize, Serialize};

/// A two-valued answer. Absent answers are modelled as `Option<YesOrNo>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    /// Returns true for `Yes`.
    pub fn to_bool(self) -> bool {
        matches!(self, YesOrNo::Yes)
    }

    /// Converts a bool into an answer.
    pub fn from_bool(value: bool) -> Self {
        if value {
            YesOrNo::Yes
        } else {
            YesOrNo::No
        }
    }
}

/// Returns true only when the answer is present and `Yes`.
pub fn is_yes(answer: Option<YesOrNo>) -> bool {
    answer.map(YesOrNo::to_bool).unwrap_or(false)
}
