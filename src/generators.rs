use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which numeric sequence drives template expansion during a search
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// 1, 3, 5, 7, ...
    Odd,
    /// 2, 4, 6, 8, ...
    Even,
    /// start, start+1, start+2, ...
    Counting {
        /// First value produced (defaults to 1)
        start: u64,
    },
}

impl GeneratorKind {
    /// Counting generator with an optional start value.
    ///
    /// A missing start defaults to 1, matching the permissive CLI surface
    /// where `--start` is optional.
    pub fn counting(start: Option<u64>) -> Self {
        GeneratorKind::Counting {
            start: start.unwrap_or(1),
        }
    }

    /// Build a fresh, infinite stream of values.
    ///
    /// Each call returns a new stream with its own cursor. Streams are never
    /// shared between searches.
    pub fn stream(&self) -> NumberStream {
        match self {
            GeneratorKind::Odd => NumberStream { next: 1, step: 2 },
            GeneratorKind::Even => NumberStream { next: 2, step: 2 },
            GeneratorKind::Counting { start } => NumberStream {
                next: *start,
                step: 1,
            },
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = anyhow::Error;

    /// Parse generator kind from string (case-insensitive).
    ///
    /// Accepts `odd`, `even`, `int`, and `int:N` for a custom start.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "odd" => Ok(GeneratorKind::Odd),
            "even" => Ok(GeneratorKind::Even),
            "int" => Ok(GeneratorKind::counting(None)),
            _ => {
                if let Some(start) = lower.strip_prefix("int:") {
                    // An unparseable start falls back to the default of 1
                    Ok(GeneratorKind::counting(start.parse().ok()))
                } else {
                    anyhow::bail!("Unsupported generator: {} (use odd, even, int, or int:N)", s)
                }
            }
        }
    }
}

/// Infinite lazy sequence of integers.
///
/// The cursor advances one step per pull and never resets or runs out;
/// callers decide when to stop pulling.
#[derive(Debug, Clone)]
pub struct NumberStream {
    next: u64,
    step: u64,
}

impl Iterator for NumberStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.next;
        self.next += self.step;
        Some(value)
    }
}

#[cfg(test)]
#[path = "generators_test.rs"]
mod generators_test;
