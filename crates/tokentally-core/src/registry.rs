//! Estimator registry and dispatch

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::is_space;
use crate::config::CounterOptions;
use crate::estimator::{simple_word_count, EstimateError, EstimatorSpec, Strategy};
use crate::types::{Estimate, Thresholds};

/// Named estimators exposed to hosts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Estimator {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "claude")]
    Claude,
    #[serde(rename = "llama")]
    Llama,
    #[serde(rename = "chinese-word-count")]
    ChineseWordCount,
    #[serde(rename = "simple-word-count")]
    SimpleWordCount,
}

impl Estimator {
    /// Canonical order used by selection UIs
    pub const ALL: [Estimator; 6] = [
        Estimator::Gpt35Turbo,
        Estimator::Gpt4,
        Estimator::Claude,
        Estimator::Llama,
        Estimator::ChineseWordCount,
        Estimator::SimpleWordCount,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Estimator::Gpt35Turbo => "gpt-3.5-turbo",
            Estimator::Gpt4 => "gpt-4",
            Estimator::Claude => "claude",
            Estimator::Llama => "llama",
            Estimator::ChineseWordCount => "chinese-word-count",
            Estimator::SimpleWordCount => "simple-word-count",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Estimator::Gpt35Turbo => "GPT-3.5 Turbo",
            Estimator::Gpt4 => "GPT-4",
            Estimator::Claude => "Claude",
            Estimator::Llama => "LLaMA",
            Estimator::ChineseWordCount => "Chinese Word Count",
            Estimator::SimpleWordCount => "Simple Word Count",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Estimator::Gpt35Turbo => "GPT-3.5 Turbo approximation (cl100k_base density)",
            Estimator::Gpt4 => "GPT-4 approximation (cl100k_base density)",
            Estimator::Claude => "Claude approximation",
            Estimator::Llama => "LLaMA approximation (SentencePiece density)",
            Estimator::ChineseWordCount => "Chinese word count (two characters per word)",
            Estimator::SimpleWordCount => "Whitespace word count, one word per CJK character",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Look up a name, falling back to the GPT family for unknown names
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            debug!(estimator = name, "unknown estimator, using default");
            Self::default()
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Estimator::Gpt35Turbo | Estimator::Gpt4 => Strategy::Multiplier(EstimatorSpec::GPT),
            Estimator::Claude => Strategy::Multiplier(EstimatorSpec::CLAUDE),
            Estimator::Llama => Strategy::Multiplier(EstimatorSpec::LLAMA),
            Estimator::ChineseWordCount => Strategy::ChineseWordCount,
            Estimator::SimpleWordCount => Strategy::SimpleWordCount,
        }
    }
}

impl std::fmt::Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Estimator {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| EstimateError::UnknownEstimator(s.to_string()))
    }
}

/// Canonical estimator names in stable order
pub fn list_estimators() -> Vec<&'static str> {
    Estimator::ALL.iter().map(Estimator::name).collect()
}

/// Token counter bound to explicit options
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    options: CounterOptions,
}

impl TokenCounter {
    pub fn new(options: CounterOptions) -> Self {
        Self { options }
    }

    pub fn estimator(&self) -> Estimator {
        self.options.estimator
    }

    pub fn options(&self) -> &CounterOptions {
        &self.options
    }

    /// Estimate the token count of `text`.
    ///
    /// Blank input is always 0. An internal fault degrades to the simple
    /// word count so callers always get a number.
    pub fn count(&self, text: &str) -> usize {
        if text.trim_matches(is_space).is_empty() {
            return 0;
        }

        or_word_count(self.try_count(text), text, self.options.estimator)
    }

    /// Run the selected strategy without the fallback
    pub fn try_count(&self, text: &str) -> Result<usize, EstimateError> {
        self.options
            .estimator
            .strategy()
            .count(text, &self.options.punctuation)
    }

    pub fn estimate(&self, text: &str, thresholds: Thresholds) -> Estimate {
        let count = self.count(text);
        Estimate {
            count,
            severity: thresholds.severity(count),
            estimator: self.options.estimator,
        }
    }
}

/// Settle a strategy result, degrading a fault to the simple word count
fn or_word_count(result: Result<usize, EstimateError>, text: &str, estimator: Estimator) -> usize {
    result.unwrap_or_else(|err| {
        warn!(
            estimator = estimator.name(),
            error = %err,
            "estimation failed, falling back to simple word count"
        );
        simple_word_count(text)
    })
}

/// Count tokens with the named estimator and default options
pub fn count_tokens(text: &str, estimator: &str) -> usize {
    TokenCounter::new(CounterOptions::for_name(estimator)).count(text)
}

/// Count tokens and classify the result against `thresholds`
pub fn estimate(text: &str, estimator: &str, thresholds: Thresholds) -> Estimate {
    TokenCounter::new(CounterOptions::for_name(estimator)).estimate(text, thresholds)
}
