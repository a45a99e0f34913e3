//! Heuristic token estimation for mixed-script text
//!
//! Approximates how many tokens a model family would spend on a piece of
//! text without loading any vocabulary. Text is classified once into
//! character-class runs and the selected estimator turns those runs into a
//! count. A count can then be classified into a severity tier.

mod classify;
mod config;
mod estimator;
mod registry;
mod types;

pub use classify::{char_class, classify, is_cjk, is_space, RunTally};
pub use config::{CounterOptions, PunctuationSet, FULL_WIDTH_PUNCTUATION};
pub use estimator::{
    chinese_word_count, simple_word_count, EstimateError, EstimatorSpec, Multiplier, Strategy,
};
pub use registry::{count_tokens, estimate, list_estimators, Estimator, TokenCounter};
pub use types::{CharClass, CharacterRun, Estimate, Severity, Thresholds};
