use super::case::normalize_case;
use super::initials;
use super::segment::{self, Words};
use super::suffix;
use super::surname;
use super::title;
use super::{Assignment, Config, ParsedName};
use compact_str::CompactString;
use log::{debug, trace};
use smallvec::SmallVec;
use std::borrow::Cow;

type Slot<'a> = SmallVec<[Cow<'a, str>; 2]>;

#[derive(Debug)]
struct ParseOp<'a, 'c> {
    words: Words<'a>,
    config: &'c Config,
    start: usize,
    end: usize,
    honorific: Option<&'static str>,
    suffix: Option<&'a str>,
    given: Slot<'a>,
    initials: Slot<'a>,
    surname: Slot<'a>,
}

pub fn parse(name: &str, config: &Config) -> ParsedName {
    let mut op = ParseOp::new(name, config);
    op.run();

    let parsed = op.finish();
    debug!("Parsed {:?} as {:?}", name, parsed);
    parsed
}

impl<'a, 'c> ParseOp<'a, 'c> {
    fn new(name: &'a str, config: &'c Config) -> ParseOp<'a, 'c> {
        let words = segment::tokenize(name);
        let end = words.len();

        ParseOp {
            words,
            config,
            start: 0,
            end,
            honorific: None,
            suffix: None,
            given: SmallVec::new(),
            initials: SmallVec::new(),
            surname: SmallVec::new(),
        }
    }

    fn run(&mut self) {
        if self.words.is_empty() {
            return;
        }

        self.strip_prefix();
        self.strip_suffix();

        match self.end - self.start {
            0 => {}
            1 => self.handle_single_word(),
            _ => {
                let surname_index = self.scan_given_names();
                self.found_surname(surname_index);
            }
        }
    }

    // Preserve parseability: don't strip an apparent honorific if it's the
    // only word we have, so that e.g. "Dr." alone is still a name
    fn strip_prefix(&mut self) {
        if self.words.len() < 2 {
            return;
        }

        if let Some(honorific) = title::canonicalize_prefix(self.words[0]) {
            trace!("Honorific {:?} from {:?}", honorific, self.words[0]);
            self.honorific = Some(honorific);
            self.start = 1;
        }
    }

    // Likewise, only strip a suffix if at least one word remains before it
    fn strip_suffix(&mut self) {
        if self.end - self.start < 2 {
            return;
        }

        let last = self.words[self.end - 1];
        if let Some(suffix) = suffix::canonicalize_suffix(last) {
            trace!("Suffix {:?} from {:?}", suffix, last);
            self.suffix = Some(suffix);
            self.end -= 1;
        }
    }

    fn handle_single_word(&mut self) {
        let word = normalize_case(self.words[self.start]);

        if self.honorific.is_some() {
            // "Dr. Jones" gives us a surname, not a given name
            self.surname.push(word);
        } else {
            self.given.push(word);
        }
    }

    // Walks every word before the last one, sorting out given names and
    // initials, and returns the index where the surname begins
    fn scan_given_names(&mut self) -> usize {
        debug_assert!(self.end - self.start > 1, "Invalid state for scan!");

        for i in self.start..self.end - 1 {
            let word = self.words[i];

            // A particle in first position is more likely a given name, as in
            // "Von Fabella"
            if i != self.start && self.particle_len(i) > 0 {
                trace!("Compound surname starts at {:?}", word);
                return i;
            }

            if initials::is_initial(word) {
                // Leading initials followed by more initials, as in
                // "R. J. Smith", mean the first one stands for the given name;
                // otherwise, as in "R. Jason Smith", they go by the next name
                if i == self.start && initials::is_initial(self.words[i + 1]) {
                    let given = initials::canonicalize_initial(word);
                    self.found_given(Cow::Owned(given.to_string()));
                } else {
                    self.found_initial(word);
                }
            } else {
                self.found_given(normalize_case(word));
            }
        }

        self.end - 1
    }

    fn found_surname(&mut self, index: usize) {
        match self.config.assignment {
            Assignment::Overwrite => {
                // Only the final eligible word survives in this mode, even
                // after a compound surname marker
                let word = self.words[self.end - 1];
                self.surname.push(normalize_case(word));
            }
            Assignment::Accumulate => {
                let last = self.end - 1;
                let mut particle_words = 0;

                for i in index..self.end {
                    let word = self.words[i];
                    if particle_words == 0 && i < last {
                        particle_words = surname::particle_len(
                            &self.words[i..last],
                            self.config.multi_word_particles,
                        );
                    }

                    // Keep "de la" in "Anthony de la Alpaca" as typed
                    let keep_case = particle_words > 0 && !word.chars().any(char::is_uppercase);
                    particle_words = particle_words.saturating_sub(1);

                    self.surname.push(if keep_case {
                        Cow::Borrowed(word)
                    } else {
                        normalize_case(word)
                    });
                }
            }
        }
    }

    fn particle_len(&self, index: usize) -> usize {
        surname::particle_len(
            &self.words[index..self.end],
            self.config.multi_word_particles,
        )
    }

    fn found_given(&mut self, word: Cow<'a, str>) {
        trace!("Given name {:?}", word);
        fill(&mut self.given, word, self.config.assignment);
    }

    fn found_initial(&mut self, word: &'a str) {
        let initial = initials::canonicalize_initial(word);
        trace!("Initial {:?}", initial);
        fill(
            &mut self.initials,
            Cow::Owned(initial.to_string()),
            self.config.assignment,
        );
    }

    fn finish(self) -> ParsedName {
        ParsedName {
            honorific: self.honorific.map(CompactString::from).unwrap_or_default(),
            first_name: join(&self.given),
            initials: join(&self.initials),
            last_name: join(&self.surname),
            suffix: self.suffix.map(CompactString::from).unwrap_or_default(),
        }
    }
}

fn fill<'a>(slot: &mut Slot<'a>, word: Cow<'a, str>, assignment: Assignment) {
    if assignment == Assignment::Overwrite {
        slot.clear();
    }
    slot.push(word);
}

fn join(words: &[Cow<str>]) -> CompactString {
    let mut result = CompactString::default();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate(name: &str) -> ParsedName {
        parse(name, &Config::default())
    }

    fn overwrite(name: &str) -> ParsedName {
        parse(name, &Config::default().with_assignment(Assignment::Overwrite))
    }

    #[test]
    fn first_last() {
        let name = accumulate("John Doe");
        assert_eq!("John", name.first_name());
        assert_eq!("Doe", name.last_name());
        assert_eq!("", name.initials());
        assert_eq!("", name.honorific());
        assert_eq!("", name.suffix());
    }

    #[test]
    fn initial_last() {
        let name = accumulate("J. Doe");
        assert_eq!("", name.first_name());
        assert_eq!("J.", name.initials());
        assert_eq!("Doe", name.last_name());
    }

    #[test]
    fn leading_initials() {
        let name = accumulate("R. J. Smith");
        assert_eq!("R.", name.first_name());
        assert_eq!("J.", name.initials());
        assert_eq!("Smith", name.last_name());
    }

    #[test]
    fn leading_initials_without_periods() {
        let name = accumulate("R J Smith");
        assert_eq!("R.", name.first_name());
        assert_eq!("J.", name.initials());
        assert_eq!("Smith", name.last_name());

        let name = overwrite("r j k smith");
        assert_eq!("R.", name.first_name());
        assert_eq!("K.", name.initials());
        assert_eq!("Smith", name.last_name());
    }

    #[test]
    fn goes_by_middle_name() {
        let name = accumulate("F. Murray Abraham");
        assert_eq!("Murray", name.first_name());
        assert_eq!("F.", name.initials());
        assert_eq!("Abraham", name.last_name());
    }

    #[test]
    fn honorific_and_surname() {
        let name = accumulate("Dr. Jones");
        assert_eq!("Dr.", name.honorific());
        assert_eq!("", name.first_name());
        assert_eq!("Jones", name.last_name());
    }

    #[test]
    fn lone_honorific_is_kept() {
        let name = accumulate("Dr.");
        assert_eq!("", name.honorific());
        assert_eq!("Dr.", name.first_name());
    }

    #[test]
    fn lone_suffix_is_kept() {
        let name = accumulate("Dr. Jr.");
        assert_eq!("Dr.", name.honorific());
        assert_eq!("Jr.", name.last_name());
        assert_eq!("", name.suffix());
    }

    #[test]
    fn suffix() {
        let name = accumulate("Ken Griffey Jr.");
        assert_eq!("Ken", name.first_name());
        assert_eq!("Griffey", name.last_name());
        assert_eq!("Jr.", name.suffix());
    }

    #[test]
    fn compound_surname() {
        let name = accumulate("Anthony de la Alpaca");
        assert_eq!("Anthony", name.first_name());
        assert_eq!("de la Alpaca", name.last_name());

        let name = overwrite("Anthony de la Alpaca");
        assert_eq!("Anthony", name.first_name());
        assert_eq!("Alpaca", name.last_name());
    }

    #[test]
    fn compound_surname_capitalized() {
        let name = accumulate("LUDWIG VAN BEETHOVEN");
        assert_eq!("Ludwig", name.first_name());
        assert_eq!("Van Beethoven", name.last_name());
    }

    #[test]
    fn leading_particle_is_given_name() {
        let name = accumulate("Von Fabella");
        assert_eq!("Von", name.first_name());
        assert_eq!("Fabella", name.last_name());
    }

    #[test]
    fn many_given_names() {
        let name = accumulate("John Paul Q. X. Public");
        assert_eq!("John Paul", name.first_name());
        assert_eq!("Q. X.", name.initials());
        assert_eq!("Public", name.last_name());

        let name = overwrite("John Paul Q. X. Public");
        assert_eq!("Paul", name.first_name());
        assert_eq!("X.", name.initials());
        assert_eq!("Public", name.last_name());
    }

    #[test]
    fn single_word_particles() {
        let config = Config::default().with_multi_word_particles(false);
        let name = parse("Anthony De La Alpaca", &config);
        assert_eq!("De La Alpaca", name.last_name());

        let name = parse("Anthony de la Alpaca", &config);
        assert_eq!("de la Alpaca", name.last_name());
    }

    #[test]
    fn empty() {
        assert_eq!(ParsedName::default(), accumulate(""));
        assert_eq!(ParsedName::default(), accumulate("   "));
        assert_eq!(ParsedName::default(), accumulate("(Bob)"));
    }
}
