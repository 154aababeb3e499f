//! A library for splitting free-form, western-style full names into an
//! honorific, given name, middle initials, surname and suffix.
//!
//! Parsing never fails: fields that can't be determined are left empty.
//!
//! ```
//! let name = name_splitter::parse_name("William S. Gates III");
//! assert_eq!("William", name.first_name());
//! assert_eq!("S.", name.initials());
//! assert_eq!("Gates", name.last_name());
//! assert_eq!("III", name.suffix());
//! ```

mod case;
mod initials;
mod parse;
mod segment;
mod suffix;
mod surname;
mod title;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

use compact_str::CompactString;
use std::fmt;

pub use case::{is_pascal_case, normalize_case};
pub use initials::is_initial;
pub use segment::tokenize;
pub use suffix::is_suffix;
pub use surname::is_compound_marker;
pub use title::is_honorific;

/// How words are assigned to the given name, initials and surname.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Assignment {
    /// Every word found for a field is kept, joined with spaces, and the
    /// surname runs from any compound surname marker to the end.
    #[default]
    Accumulate,
    /// Each field holds only the last word assigned to it, and the surname
    /// is the final word. Matches the behavior of older name splitters.
    Overwrite,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub assignment: Assignment,
    /// Match multi-word particles such as "de la" as a unit.
    pub multi_word_particles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assignment: Assignment::Accumulate,
            multi_word_particles: true,
        }
    }
}

impl Config {
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn with_multi_word_particles(mut self, multi_word_particles: bool) -> Self {
        self.multi_word_particles = multi_word_particles;
        self
    }

    pub fn parse(&self, name: &str) -> ParsedName {
        parse::parse(name, self)
    }
}

/// The parts of a full name. Any of them may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParsedName {
    honorific: CompactString,
    first_name: CompactString,
    initials: CompactString,
    last_name: CompactString,
    suffix: CompactString,
}

impl ParsedName {
    /// Parses `name` with the default configuration.
    pub fn parse(name: &str) -> ParsedName {
        parse::parse(name, &Config::default())
    }

    /// Canonical honorific, e.g. "Mr." for "mister".
    pub fn honorific(&self) -> &str {
        &self.honorific
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Uppercase middle initials, each followed by a period.
    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The suffix as written, except that "Esquire" and its variants
    /// become "Esq.".
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_empty(&self) -> bool {
        self.honorific.is_empty()
            && self.first_name.is_empty()
            && self.initials.is_empty()
            && self.last_name.is_empty()
            && self.suffix.is_empty()
    }
}

/// Renders `[honorific] first | initials last [suffix]` in fixed-width
/// columns.
impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{:>4}] {:>10} | {:>2} {:>10} [{:>4}]",
            self.honorific(),
            self.first_name(),
            self.initials(),
            self.last_name(),
            self.suffix()
        )
    }
}

/// Parses `full_name` with the default configuration.
pub fn parse_name(full_name: &str) -> ParsedName {
    ParsedName::parse(full_name)
}
