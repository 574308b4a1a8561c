//! Divorce / dissolution / separation vocabulary in English and Welsh.
//!
//! One lookup keyed by `(LanguagePreference, CaseKind)` replaces per-field
//! branching in the mappers.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{CaseKind, LanguagePreference};

/// Words for one language and one kind of proceedings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminology {
    /// e.g. "divorce application".
    pub application: &'static str,
    /// e.g. "marriage".
    pub union: &'static str,
    /// e.g. "divorce process".
    pub process: &'static str,
    /// e.g. "end your marriage".
    pub ending: &'static str,
}

static TERMINOLOGY: Lazy<HashMap<(LanguagePreference, CaseKind), Terminology>> = Lazy::new(|| {
    use CaseKind::*;
    use LanguagePreference::*;

    HashMap::from([
        (
            (English, Divorce),
            Terminology {
                application: "divorce application",
                union: "marriage",
                process: "divorce process",
                ending: "end your marriage",
            },
        ),
        (
            (English, Dissolution),
            Terminology {
                application: "application to end your civil partnership",
                union: "civil partnership",
                process: "process to end your civil partnership",
                ending: "end your civil partnership",
            },
        ),
        (
            (English, JudicialSeparation),
            Terminology {
                application: "judicial separation application",
                union: "marriage",
                process: "judicial separation process",
                ending: "get a judicial separation",
            },
        ),
        (
            (English, Separation),
            Terminology {
                application: "separation application",
                union: "civil partnership",
                process: "separation process",
                ending: "get a separation",
            },
        ),
        (
            (Welsh, Divorce),
            Terminology {
                application: "cais am ysgariad",
                union: "priodas",
                process: "broses ysgaru",
                ending: "dod â’ch priodas i ben",
            },
        ),
        (
            (Welsh, Dissolution),
            Terminology {
                application: "cais i ddod â’ch partneriaeth sifil i ben",
                union: "partneriaeth sifil",
                process: "broses i ddod â’ch partneriaeth sifil i ben",
                ending: "dod â’ch partneriaeth sifil i ben",
            },
        ),
        (
            (Welsh, JudicialSeparation),
            Terminology {
                application: "cais am ymwahaniad cyfreithiol",
                union: "priodas",
                process: "broses ymwahanu cyfreithiol",
                ending: "cael ymwahaniad cyfreithiol",
            },
        ),
        (
            (Welsh, Separation),
            Terminology {
                application: "cais am ymwahaniad",
                union: "partneriaeth sifil",
                process: "broses ymwahanu",
                ending: "cael ymwahaniad",
            },
        ),
    ])
});

/// English fallback used if the table were ever missing an entry.
const FALLBACK: Terminology = Terminology {
    application: "divorce application",
    union: "marriage",
    process: "divorce process",
    ending: "end your marriage",
};

/// Looks up the vocabulary for a language and kind of proceedings.
pub fn terminology(language: LanguagePreference, kind: CaseKind) -> Terminology {
    TERMINOLOGY.get(&(language, kind)).copied().unwrap_or(FALLBACK)
}
