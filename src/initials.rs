use compact_str::CompactString;

/// A lone letter, or a letter and a period ("R", "R.").
pub fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), None, _) => true,
        (Some(a), Some(b), None) => a == '.' || b == '.',
        _ => false,
    }
}

/// Uppercases an initial and gives it exactly one trailing period.
pub fn canonicalize_initial(word: &str) -> CompactString {
    debug_assert!(is_initial(word));

    let mut result = CompactString::new("");
    result.extend(
        word.chars()
            .filter(|c| *c != '.')
            .flat_map(char::to_uppercase),
    );
    result.push('.');
    result
}
