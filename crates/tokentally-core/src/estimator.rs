//! Estimation strategies
//!
//! Three model families share one formula and differ only in their
//! multipliers. The two word-count strategies use their own algorithms.

use thiserror::Error;

use crate::classify::{classify, is_cjk, is_space, RunTally};
use crate::config::PunctuationSet;
use crate::types::{CharClass, CharacterRun};

/// Internal estimation failures. Never surfaced by `count_tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("count overflow applying multiplier {factor} to {count}")]
    Overflow { count: usize, factor: Multiplier },

    #[error("count overflow summing estimator parts")]
    SumOverflow,

    #[error("unknown estimator: {0}")]
    UnknownEstimator(String),
}

/// Non-negative multiplier stored in thousandths so rounding is exact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(1000);

    pub const fn from_milli(milli: u32) -> Self {
        Self(milli)
    }

    pub fn milli(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 1000.0
    }

    /// `ceil(count * factor)`
    pub fn apply(&self, count: usize) -> Result<usize, EstimateError> {
        let overflow = || EstimateError::Overflow {
            count,
            factor: *self,
        };
        let scaled = count
            .checked_mul(self.0 as usize)
            .and_then(|v| v.checked_add(999))
            .ok_or_else(overflow)?;
        Ok(scaled / 1000)
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let digits = format!("{:03}", frac);
            write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
        }
    }
}

/// Per-family multipliers applied to a `RunTally`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorSpec {
    /// Per Latin word run
    pub latin_word: Multiplier,
    /// Per CJK ideograph
    pub cjk_char: Multiplier,
    /// Per digit run (a number is one unit whatever its length)
    pub digit_run: Multiplier,
    /// Per symbol character
    pub symbol: Multiplier,
}

impl EstimatorSpec {
    /// cl100k-style: sub-word splits on English, two CJK chars per token
    pub const GPT: EstimatorSpec = EstimatorSpec {
        latin_word: Multiplier::from_milli(1300),
        cjk_char: Multiplier::from_milli(500),
        digit_run: Multiplier::ONE,
        symbol: Multiplier::from_milli(500),
    };

    pub const CLAUDE: EstimatorSpec = EstimatorSpec {
        latin_word: Multiplier::from_milli(1200),
        cjk_char: Multiplier::from_milli(600),
        digit_run: Multiplier::ONE,
        symbol: Multiplier::from_milli(400),
    };

    /// SentencePiece-style: finer sub-words, every symbol its own token
    pub const LLAMA: EstimatorSpec = EstimatorSpec {
        latin_word: Multiplier::from_milli(1400),
        cjk_char: Multiplier::from_milli(800),
        digit_run: Multiplier::from_milli(1200),
        symbol: Multiplier::ONE,
    };

    pub fn apply(&self, tally: &RunTally) -> Result<usize, EstimateError> {
        let parts = [
            self.latin_word.apply(tally.latin_words)?,
            self.cjk_char.apply(tally.cjk_chars)?,
            self.digit_run.apply(tally.digit_runs)?,
            self.symbol.apply(tally.symbol_chars)?,
        ];

        parts.iter().try_fold(0usize, |acc, &part| {
            acc.checked_add(part).ok_or(EstimateError::SumOverflow)
        })
    }
}

/// How an estimator turns text into a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Multiplier(EstimatorSpec),
    ChineseWordCount,
    SimpleWordCount,
}

impl Strategy {
    pub fn count(&self, text: &str, punctuation: &PunctuationSet) -> Result<usize, EstimateError> {
        match self {
            Strategy::Multiplier(spec) => spec.apply(&RunTally::from_text(text)),
            Strategy::ChineseWordCount => Ok(chinese_word_count(&classify(text), punctuation)),
            Strategy::SimpleWordCount => Ok(simple_word_count(text)),
        }
    }
}

/// Two CJK characters per word, one per Latin word, number and listed mark.
///
/// Symbols outside the punctuation set are not counted.
pub fn chinese_word_count(runs: &[CharacterRun<'_>], punctuation: &PunctuationSet) -> usize {
    let tally = RunTally::from_runs(runs);
    let marks: usize = runs
        .iter()
        .filter(|r| r.class == CharClass::Symbol)
        .map(|r| punctuation.count_in(r.text))
        .sum();

    tally.cjk_chars.div_ceil(2) + tally.latin_words + tally.digit_runs + marks
}

/// Whitespace-delimited word count where every CJK character is a word.
///
/// A token holding CJK characters contributes one per character, plus one
/// if anything else is left once they are removed. Any other token is one.
pub fn simple_word_count(text: &str) -> usize {
    text.split(is_space)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut cjk = 0;
            let mut rest = false;
            for c in token.chars() {
                if is_cjk(c) {
                    cjk += 1;
                } else {
                    rest = true;
                }
            }
            if cjk == 0 {
                1
            } else {
                cjk + usize::from(rest)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(
        latin_words: usize,
        cjk_chars: usize,
        digit_runs: usize,
        symbol_chars: usize,
    ) -> RunTally {
        RunTally {
            latin_words,
            cjk_chars,
            digit_runs,
            symbol_chars,
        }
    }

    #[test]
    fn test_multiplier_apply_rounds_up() {
        let m = Multiplier::from_milli(1300);
        assert_eq!(m.apply(0).unwrap(), 0);
        assert_eq!(m.apply(1).unwrap(), 2);
        assert_eq!(m.apply(2).unwrap(), 3);
        assert_eq!(m.apply(10).unwrap(), 13);
        assert_eq!(Multiplier::ONE.apply(7).unwrap(), 7);
    }

    #[test]
    fn test_multiplier_overflow() {
        let m = Multiplier::from_milli(1400);
        let err = m.apply(usize::MAX / 2).unwrap_err();
        assert!(matches!(err, EstimateError::Overflow { .. }));
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::from_milli(1300).to_string(), "1.3");
        assert_eq!(Multiplier::from_milli(500).to_string(), "0.5");
        assert_eq!(Multiplier::from_milli(1250).to_string(), "1.25");
        assert_eq!(Multiplier::ONE.to_string(), "1");
        assert!((Multiplier::from_milli(800).as_f64() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpt_spec() {
        assert_eq!(EstimatorSpec::GPT.apply(&tally(2, 0, 0, 0)).unwrap(), 3);
        assert_eq!(EstimatorSpec::GPT.apply(&tally(0, 4, 0, 0)).unwrap(), 2);
        assert_eq!(EstimatorSpec::GPT.apply(&tally(0, 0, 3, 3)).unwrap(), 5);
    }

    #[test]
    fn test_claude_spec() {
        // ceil(2.4) + ceil(1.8) + 1 + ceil(1.2)
        assert_eq!(EstimatorSpec::CLAUDE.apply(&tally(2, 3, 1, 3)).unwrap(), 3 + 2 + 1 + 2);
    }

    #[test]
    fn test_llama_spec() {
        // ceil(2.8) + ceil(2.4) + ceil(1.2) + 3
        assert_eq!(EstimatorSpec::LLAMA.apply(&tally(2, 3, 1, 3)).unwrap(), 3 + 3 + 2 + 3);
    }

    #[test]
    fn test_chinese_word_count() {
        let runs = classify("你好，世界！hello 123");
        assert_eq!(chinese_word_count(&runs, &PunctuationSet::new()), 6);
    }

    #[test]
    fn test_chinese_word_count_ignores_ascii_symbols() {
        let runs = classify("a, b. c!");
        assert_eq!(chinese_word_count(&runs, &PunctuationSet::new()), 3);
    }

    #[test]
    fn test_chinese_word_count_odd_cjk_rounds_up() {
        let runs = classify("你好世");
        assert_eq!(chinese_word_count(&runs, &PunctuationSet::new()), 2);
    }

    #[test]
    fn test_chinese_word_count_custom_punctuation() {
        let runs = classify("一、二、三");
        assert_eq!(chinese_word_count(&runs, &PunctuationSet::new()), 2);
        let extended = PunctuationSet::new().with_extra(['、']);
        assert_eq!(chinese_word_count(&runs, &extended), 4);
    }

    #[test]
    fn test_simple_word_count() {
        assert_eq!(simple_word_count("你好 world"), 3);
        assert_eq!(simple_word_count("hello   big\tworld\n"), 3);
        assert_eq!(simple_word_count("你好,"), 3);
        assert_eq!(simple_word_count("abc你def"), 2);
        assert_eq!(simple_word_count("  "), 0);
        assert_eq!(simple_word_count("\u{FEFF}你好 world"), 3);
    }

    #[test]
    fn test_strategy_dispatch() {
        let punctuation = PunctuationSet::new();
        let text = "hello world";
        assert_eq!(Strategy::Multiplier(EstimatorSpec::GPT).count(text, &punctuation).unwrap(), 3);
        assert_eq!(Strategy::ChineseWordCount.count(text, &punctuation).unwrap(), 2);
        assert_eq!(Strategy::SimpleWordCount.count(text, &punctuation).unwrap(), 2);
    }
}
