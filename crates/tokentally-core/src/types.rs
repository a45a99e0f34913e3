//! Core types for token estimation

use serde::{Deserialize, Serialize};

use crate::registry::Estimator;

/// Character class assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// `[A-Za-z]+`
    LatinWord,
    /// A single CJK unified ideograph (U+4E00..=U+9FFF)
    CjkChar,
    /// `[0-9]+`
    Digit,
    /// Anything that is not whitespace, Latin, CJK or a digit
    Symbol,
    /// Never emitted as a run; carries no count
    Whitespace,
}

/// A contiguous slice of the input belonging to one character class.
///
/// Latin, digit and symbol runs are maximal. CJK runs always hold exactly one
/// ideograph so that the run count equals the character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRun<'a> {
    pub class: CharClass,
    pub text: &'a str,
}

impl<'a> CharacterRun<'a> {
    pub fn new(class: CharClass, text: &'a str) -> Self {
        Self { class, text }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Severity tier for an estimated count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

impl Severity {
    /// Classify a count against a warning and a danger threshold.
    ///
    /// Lower bounds are inclusive and the danger check runs first, so a
    /// misordered pair (`warning >= danger`) still produces a defined tier.
    pub fn classify(count: usize, warning: usize, danger: usize) -> Self {
        if count >= danger {
            Severity::Danger
        } else if count >= warning {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warning and danger thresholds, not validated here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: usize,
    pub danger: usize,
}

impl Thresholds {
    pub fn new(warning: usize, danger: usize) -> Self {
        Self { warning, danger }
    }

    pub fn severity(&self, count: usize) -> Severity {
        Severity::classify(count, self.warning, self.danger)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(4000, 8000)
    }
}

/// Result handed back to the host: a count and the tier to render it with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub count: usize,
    pub severity: Severity,
    pub estimator: Estimator,
}
