//! Words for the other party: husband, wife, spouse or civil partner.

use crate::domain::foundation::{CaseKind, Gender, LanguagePreference};

/// Relationship word for a partner of the given gender.
///
/// Civil partnerships always use "civil partner". Marriages use the
/// partner's gender and fall back to "spouse" when it is unknown.
pub fn partner_word(
    kind: CaseKind,
    partner_gender: Option<Gender>,
    language: LanguagePreference,
) -> &'static str {
    use LanguagePreference::*;

    if !kind.is_marriage() {
        return match language {
            English => "civil partner",
            Welsh => "partner sifil",
        };
    }

    match (partner_gender, language) {
        (Some(Gender::Male), English) => "husband",
        (Some(Gender::Male), Welsh) => "gŵr",
        (Some(Gender::Female), English) => "wife",
        (Some(Gender::Female), Welsh) => "gwraig",
        (None, English) => "spouse",
        (None, Welsh) => "priod",
    }
}
