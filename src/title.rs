static HONORIFIC_PREFIXES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/honorific_prefixes.rs"));

/// The display form of `word` if it's a recognized honorific ("mister" and
/// "MR." both give "Mr.").
pub fn canonicalize_prefix(word: &str) -> Option<&'static str> {
    let key = word.trim_end_matches('.').to_lowercase();
    HONORIFIC_PREFIXES.get(&*key).copied()
}

pub fn is_honorific(word: &str) -> bool {
    canonicalize_prefix(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(Some("Mr."), canonicalize_prefix("Mr."));
        assert_eq!(Some("Mr."), canonicalize_prefix("master"));
        assert_eq!(Some("Mr."), canonicalize_prefix("MISTER"));
        assert_eq!(Some("Mrs."), canonicalize_prefix("mrs"));
        assert_eq!(Some("Ms."), canonicalize_prefix("Miss"));
        assert_eq!(Some("Ms."), canonicalize_prefix("Ms."));
        assert_eq!(Some("Dr."), canonicalize_prefix("DR"));
        assert_eq!(Some("Rev."), canonicalize_prefix("Rev."));
        assert_eq!(Some("Fr."), canonicalize_prefix("fr.."));
    }

    #[test]
    fn not_honorifics() {
        assert!(!is_honorific("Doe"));
        assert!(!is_honorific("Prof."));
        assert!(!is_honorific("M.r"));
        assert!(!is_honorific(""));
    }
}
