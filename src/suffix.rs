use std::borrow::Cow;

static SUFFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

const ESQUIRE: &str = "Esq.";

pub fn is_suffix(word: &str) -> bool {
    let key = if word.contains('.') {
        Cow::Owned(word.replace('.', ""))
    } else {
        Cow::Borrowed(word)
    };
    SUFFIXES.contains(&*key)
}

/// The suffix as it should be displayed: verbatim, except that any form of
/// "esquire" is abbreviated.
pub fn canonicalize_suffix(word: &str) -> Option<&str> {
    if !is_suffix(word) {
        None
    } else if word
        .get(..3)
        .filter(|prefix| prefix.eq_ignore_ascii_case("esq"))
        .is_some()
    {
        Some(ESQUIRE)
    } else {
        Some(word)
    }
}
