use std::collections::BTreeSet;
use std::fmt;

use crate::data::{ASCII_PRINTABLE_FIRST, ASCII_PRINTABLE_LAST, CJK_PUNCTUATION};

/// Set of distinct characters accumulated across all scan roots.
///
/// Plain set semantics: no duplicates, no insertion order. Iteration and
/// serialization follow `char` ordering, so the text artifact handed to the
/// subsetter is identical across runs. The null character is never admitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    chars: BTreeSet<char>,
}

impl Charset {
    /// Create an empty character set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single character. `U+0000` is skipped.
    pub fn insert(&mut self, ch: char) {
        if ch != '\0' {
            self.chars.insert(ch);
        }
    }

    /// Add every character of `text`.
    pub fn extend_from_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    /// Union in the guaranteed minimum glyph set: printable ASCII (menu
    /// shortcuts, numbers, etc.) and common CJK punctuation used in UI copy.
    /// Applied unconditionally so the subset stays usable even when
    /// extraction finds nothing.
    pub fn add_baseline(&mut self) {
        for ch in ASCII_PRINTABLE_FIRST..=ASCII_PRINTABLE_LAST {
            self.insert(ch);
        }
        self.extend_from_text(CJK_PUNCTUATION);
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate the characters in ascending `char` order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Serialize as one sorted string, the exact content of the glyph-list
    /// file passed to the subsetter.
    pub fn to_text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Extend<char> for Charset {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.insert(ch);
        }
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut charset = Charset::new();
        charset.extend(iter);
        charset
    }
}

/// How the output font was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetOutcome {
    /// fontTools wrote a reduced font to the output path.
    Subsetted,
    /// The input font was copied to the output path unchanged.
    CopiedFull(FallbackReason),
}

impl SubsetOutcome {
    /// True when a real subset was produced rather than a verbatim copy.
    pub fn is_subset(&self) -> bool {
        matches!(self, SubsetOutcome::Subsetted)
    }
}

/// Why the invoker fell back to copying the input font verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The fontTools subset module could not be imported.
    FontToolsUnavailable,
    /// The subset subprocess failed to spawn or exited with an error.
    SubsetFailed,
    /// The subprocess reported success but left a missing or empty file.
    EmptyOutput,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::FontToolsUnavailable => write!(f, "fontTools not available"),
            FallbackReason::SubsetFailed => write!(f, "fontTools.subset failed"),
            FallbackReason::EmptyOutput => write!(f, "subset output missing"),
        }
    }
}
