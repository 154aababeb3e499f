use smallvec::SmallVec;
use std::str::SplitWhitespace;

pub type Words<'a> = SmallVec<[&'a str; 7]>;

/// Whitespace-delimited words of a name, skipping any word that opens a
/// parenthetical (typically a nickname, as in "Robert (Bob) Smith").
pub struct Segments<'a> {
    text: SplitWhitespace<'a>,
}

impl<'a> Segments<'a> {
    pub fn from_text(text: &'a str) -> Segments<'a> {
        Segments {
            text: text.split_whitespace(),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.text.by_ref().find(|word| !word.contains('('))
    }
}

/// Splits `text` into the ordered words the parser classifies. Empty or
/// all-whitespace input gives an empty list.
pub fn tokenize(text: &str) -> Words<'_> {
    Segments::from_text(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_runs_of_whitespace() {
        assert_eq!(
            &["John", "Q.", "Public"][..],
            &*tokenize("  John \t Q.\n Public  ")
        );
    }

    #[test]
    fn empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn drops_parenthetical() {
        assert_eq!(&["Robert", "Smith"][..], &*tokenize("Robert (Bob) Smith"));
        assert_eq!(&["Robert", "Smith"][..], &*tokenize("Robert Smith (Jr)"));
    }

    #[test]
    fn only_opening_word_is_dropped() {
        // Closing halves of multi-word parentheticals survive
        assert_eq!(
            &["Robert", "Bob)", "Smith"][..],
            &*tokenize("Robert (Big Bob) Smith")
        );
    }
}
