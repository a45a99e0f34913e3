//! Single-pass character classification

use crate::types::{CharClass, CharacterRun};

/// First and last code points of the CJK Unified Ideographs block
const CJK_START: char = '\u{4E00}';
const CJK_END: char = '\u{9FFF}';

/// Check whether a character is a CJK unified ideograph
pub fn is_cjk(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// Whitespace as hosts see it, including the U+FEFF byte-order mark
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Class of a single character.
///
/// Precedence: whitespace, Latin letter, CJK ideograph, ASCII digit, symbol.
pub fn char_class(c: char) -> CharClass {
    if is_space(c) {
        CharClass::Whitespace
    } else if c.is_ascii_alphabetic() {
        CharClass::LatinWord
    } else if is_cjk(c) {
        CharClass::CjkChar
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Symbol
    }
}

/// Segment text into character-class runs in one left-to-right pass.
///
/// Whitespace separates runs but is not emitted. Each CJK ideograph becomes
/// its own run; every other class merges with its neighbours.
pub fn classify(text: &str) -> Vec<CharacterRun<'_>> {
    let mut runs = Vec::new();
    let mut open: Option<(CharClass, usize)> = None;

    for (idx, c) in text.char_indices() {
        let class = char_class(c);

        if let Some((current, start)) = open {
            if current == class && class != CharClass::CjkChar {
                continue;
            }
            if current != CharClass::Whitespace {
                runs.push(CharacterRun::new(current, &text[start..idx]));
            }
        }
        open = Some((class, idx));
    }

    if let Some((current, start)) = open {
        if current != CharClass::Whitespace {
            runs.push(CharacterRun::new(current, &text[start..]));
        }
    }

    runs
}

/// Per-class totals consumed by the multiplier estimators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Number of Latin word runs
    pub latin_words: usize,
    /// Number of CJK ideographs
    pub cjk_chars: usize,
    /// Number of digit runs, regardless of their length
    pub digit_runs: usize,
    /// Number of symbol characters
    pub symbol_chars: usize,
}

impl RunTally {
    pub fn from_runs(runs: &[CharacterRun<'_>]) -> Self {
        let mut tally = Self::default();
        for run in runs {
            match run.class {
                CharClass::LatinWord => tally.latin_words += 1,
                CharClass::CjkChar => tally.cjk_chars += run.len(),
                CharClass::Digit => tally.digit_runs += 1,
                CharClass::Symbol => tally.symbol_chars += run.len(),
                CharClass::Whitespace => {}
            }
        }
        tally
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_runs(&classify(text))
    }
}
