//! Configuration for token counting

use std::collections::BTreeSet;

use crate::registry::Estimator;

/// Full-width punctuation counted by the Chinese word-count estimator
pub const FULL_WIDTH_PUNCTUATION: [char; 12] = [
    '，', '。', '；', '：', '？', '！', '＂', '＇', '（', '）', '【', '】',
];

/// Punctuation marks that count as one word each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationSet {
    marks: BTreeSet<char>,
}

impl PunctuationSet {
    pub fn new() -> Self {
        Self {
            marks: FULL_WIDTH_PUNCTUATION.into_iter().collect(),
        }
    }

    /// Start from an explicit set, ignoring the defaults
    pub fn from_marks<I: IntoIterator<Item = char>>(marks: I) -> Self {
        Self {
            marks: marks.into_iter().collect(),
        }
    }

    /// Extend the set with additional marks
    pub fn with_extra<I: IntoIterator<Item = char>>(mut self, marks: I) -> Self {
        self.marks.extend(marks);
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.marks.contains(&c)
    }

    pub fn count_in(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.contains(c)).count()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.marks.iter().copied()
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter configuration, resolved by the host before counting
#[derive(Debug, Clone, Default)]
pub struct CounterOptions {
    /// Selected estimator
    pub estimator: Estimator,

    /// Punctuation set for `chinese-word-count`
    pub punctuation: PunctuationSet,
}

impl CounterOptions {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            punctuation: PunctuationSet::default(),
        }
    }

    /// Resolve options from an estimator name, falling back to the default
    pub fn for_name(name: &str) -> Self {
        Self::new(Estimator::resolve(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_defaults() {
        let set = PunctuationSet::new();
        assert_eq!(set.len(), 12);
        assert!(set.contains('，'));
        assert!(set.contains('！'));
        assert!(set.contains('【'));
        assert!(!set.contains(','));
        assert!(!set.contains('、'));
    }

    #[test]
    fn test_punctuation_extend() {
        let set = PunctuationSet::new().with_extra(['、', '“', '”']);
        assert_eq!(set.len(), 15);
        assert!(set.contains('、'));
        assert_eq!(set.count_in("一、二“三”"), 3);
    }

    #[test]
    fn test_punctuation_from_marks() {
        let set = PunctuationSet::from_marks(['.']);
        assert_eq!(set.len(), 1);
        assert!(!set.contains('，'));
    }

    #[test]
    fn test_options_for_name() {
        assert_eq!(CounterOptions::for_name("llama").estimator, Estimator::Llama);
        assert_eq!(
            CounterOptions::for_name("no-such-model").estimator,
            Estimator::default()
        );
    }
}
