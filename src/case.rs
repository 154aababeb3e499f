use std::borrow::Cow;

const DELIMITERS: [char; 2] = ['-', '.'];

/// True if a lowercase letter is immediately followed by an uppercase one
/// anywhere in `word`, as in "McDonald" or "DeVito".
pub fn is_pascal_case(word: &str) -> bool {
    word.as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_lowercase() && pair[1].is_ascii_uppercase())
}

/// Title-cases each hyphen- or period-delimited piece of `word`, keeping the
/// delimiters in place. Pascal-case words are returned untouched, since their
/// internal capitals are assumed to be intentional.
pub fn normalize_case(word: &str) -> Cow<str> {
    if is_pascal_case(word) {
        return Cow::Borrowed(word);
    }

    let mut capitalize_next = true;
    let mut result = String::with_capacity(word.len());

    for c in word.chars() {
        if DELIMITERS.contains(&c) {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }

    if result == word {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(result)
    }
}
