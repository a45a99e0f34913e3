use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use tokentally_core::{Estimate, Estimator, Thresholds, TokenCounter};
use tokentally_settings::{Paths, Settings};
use tracing::{debug, warn};

use crate::cli::CountArgs;
use crate::render::{self, Scope};

/// 1-based inclusive line range; an open end runs to the last line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl LineRange {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Slice `text` to the selected lines, keeping line endings
    pub fn select<'a>(&self, text: &'a str) -> &'a str {
        let mut begin = None;
        let mut finish = text.len();
        let mut offset = 0;

        for (idx, line) in text.split_inclusive('\n').enumerate() {
            let number = idx + 1;
            if number == self.start {
                begin = Some(offset);
            }
            offset += line.len();
            if Some(number) == self.end {
                finish = offset;
                break;
            }
        }

        match begin {
            Some(begin) => &text[begin..finish],
            None => "",
        }
    }
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((start, end)) => (start.trim(), end.trim()),
            None => (s.trim(), s.trim()),
        };

        let start = if start.is_empty() {
            1
        } else {
            start
                .parse::<usize>()
                .map_err(|e| format!("invalid start line '{}': {}", start, e))?
        };
        let end = if end.is_empty() {
            None
        } else {
            Some(
                end.parse::<usize>()
                    .map_err(|e| format!("invalid end line '{}': {}", end, e))?,
            )
        };

        if start == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if let Some(end) = end {
            if end < start {
                return Err(format!("range end {} is before start {}", end, start));
            }
        }

        Ok(Self { start, end })
    }
}

pub fn run(args: &CountArgs) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = tokentally_settings::load(&paths.settings_file())
        .with_context(|| format!("Failed to load {}", paths.settings_file().display()))?;

    if !settings.enabled {
        if args.json {
            println!("{}", serde_json::json!({ "enabled": false }));
        } else {
            println!("tokentally is disabled (run `tokentally config set enabled true`)");
        }
        return Ok(());
    }

    let text = read_input(args.file.as_deref())?;
    let (scope, selected) = match args.lines {
        Some(range) => (Scope::Selection, range.select(&text)),
        None => (Scope::File, text.as_str()),
    };

    let (estimate, thresholds) = count_with(selected, &settings, args);
    debug!(
        count = estimate.count,
        severity = %estimate.severity,
        estimator = %estimate.estimator,
        "estimated"
    );

    if args.json {
        println!("{}", render::json_report(scope, &estimate, thresholds));
    } else {
        println!("{}", render::status_line(scope, &estimate));
        if args.details {
            println!();
            println!("{}", render::details(scope, &estimate, thresholds));
        }
    }
    Ok(())
}

/// Resolve settings plus command-line overrides and count `text`
pub fn count_with(text: &str, settings: &Settings, args: &CountArgs) -> (Estimate, Thresholds) {
    let mut options = settings.counter_options();
    if let Some(name) = args.estimator.as_deref() {
        if Estimator::from_name(name).is_none() {
            warn!(
                estimator = name,
                "unknown estimator, using {}",
                Estimator::default()
            );
        }
        options.estimator = Estimator::resolve(name);
    }

    let defaults = settings.thresholds();
    let thresholds = Thresholds::new(
        args.warning.unwrap_or(defaults.warning),
        args.danger.unwrap_or(defaults.danger),
    );

    let estimate = TokenCounter::new(options).estimate(text, thresholds);
    (estimate, thresholds)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
