//! Severity levels and their ranks.
//!
//! # Design Decisions
//! - Ranks are compile-time constants; lookup is by exact, case-sensitive name
//! - `none` is a sentinel above every real level and disables all output
//! - Trace has no rank; it is switched on and off independently

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric ranks of the ranked levels.
pub struct LogLevels;

impl LogLevels {
    pub const DEBUG: i64 = 10;
    pub const LOG: i64 = 20;
    pub const INFO: i64 = 30;
    pub const WARN: i64 = 40;
    pub const ERROR: i64 = 50;

    /// Disabled sentinel.
    pub const NONE: i64 = 100;
}

/// Name to rank table, in severity order.
pub const LEVEL_TABLE: [(&str, i64); 6] = [
    ("debug", LogLevels::DEBUG),
    ("log", LogLevels::LOG),
    ("info", LogLevels::INFO),
    ("warn", LogLevels::WARN),
    ("error", LogLevels::ERROR),
    ("none", LogLevels::NONE),
];

/// Look up the rank of a level name.
pub fn rank_of(name: &str) -> Option<i64> {
    LEVEL_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, rank)| *rank)
}

/// A level a message can be logged at.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Log = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
}

impl Level {
    /// Every level, trace included.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Log,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Levels that take part in the ranked comparison.
    pub const RANKED: [Level; 5] = [
        Level::Debug,
        Level::Log,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Log => "log",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Rank from the level table. `None` for trace.
    pub fn rank(self) -> Option<i64> {
        match self {
            Level::Trace => None,
            other => rank_of(other.name()),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested minimum level, before resolution.
///
/// Deserializes from either an integer rank or a level name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MinimumLevel {
    Rank(i64),
    Name(String),
}

impl MinimumLevel {
    /// Resolve against the level table.
    ///
    /// A name missing from the table is not rejected: it becomes
    /// [`Threshold::Unresolved`] and its raw text is used as the comparison
    /// value.
    pub fn resolve(&self) -> Threshold {
        match self {
            MinimumLevel::Rank(rank) => Threshold::Rank(*rank),
            MinimumLevel::Name(name) => match rank_of(name) {
                Some(rank) => Threshold::Rank(rank),
                None => Threshold::Unresolved(name.clone()),
            },
        }
    }
}

impl From<i64> for MinimumLevel {
    fn from(rank: i64) -> Self {
        MinimumLevel::Rank(rank)
    }
}

impl From<&str> for MinimumLevel {
    fn from(name: &str) -> Self {
        MinimumLevel::Name(name.to_string())
    }
}

impl From<String> for MinimumLevel {
    fn from(name: String) -> Self {
        MinimumLevel::Name(name)
    }
}

/// Resolved minimum level.
#[derive(Debug, Clone, PartialEq)]
pub enum Threshold {
    Rank(i64),
    /// A level name that is not in the table, kept verbatim.
    Unresolved(String),
}

impl Threshold {
    /// Whether a message at `level` passes this threshold.
    ///
    /// Always false for trace, which is not ranked.
    pub fn admits(&self, level: Level) -> bool {
        let Some(rank) = level.rank() else {
            return false;
        };
        match self {
            Threshold::Rank(minimum) => *minimum <= rank,
            // Non-numeric text compares false against every rank.
            Threshold::Unresolved(raw) => raw_as_number(raw)
                .map(|minimum| minimum <= rank as f64)
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Rank(rank) => write!(f, "{}", rank),
            Threshold::Unresolved(raw) => f.write_str(raw),
        }
    }
}

/// Numeric reading of an unresolved level, following JavaScript's `Number()`.
///
/// Surrounding whitespace is ignored and blank text reads as zero. Accepted
/// forms are decimal literals with an optional sign and exponent, `Infinity`
/// with an optional sign, and unsigned `0x`, `0o` and `0b` integers.
/// Everything else, `inf` and `nan` included, has no numeric reading.
fn raw_as_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // `f64::from_str` also accepts `inf` and `nan`; only decimal literals pass.
    let decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_strictly_increase() {
        for pair in LEVEL_TABLE.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{} should rank below {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_none_above_every_level() {
        for level in Level::RANKED {
            assert!(level.rank().unwrap() < LogLevels::NONE);
            assert!(!Threshold::Rank(LogLevels::NONE).admits(level));
        }
    }

    #[test]
    fn test_rank_lookup_is_case_sensitive() {
        assert_eq!(rank_of("warn"), Some(40));
        assert_eq!(rank_of("WARN"), None);
        assert_eq!(rank_of("trace"), None);
    }

    #[test]
    fn test_trace_is_never_admitted_by_rank() {
        assert_eq!(Level::Trace.rank(), None);
        assert!(!Threshold::Rank(i64::MIN).admits(Level::Trace));
    }

    #[test]
    fn test_resolve_known_name() {
        assert_eq!(MinimumLevel::from("info").resolve(), Threshold::Rank(30));
        assert_eq!(MinimumLevel::from(42_i64).resolve(), Threshold::Rank(42));
    }

    #[test]
    fn test_unknown_name_is_kept_raw() {
        let threshold = MinimumLevel::from("loud").resolve();
        assert_eq!(threshold, Threshold::Unresolved("loud".into()));
        assert_eq!(threshold.to_string(), "loud");
        for level in Level::RANKED {
            assert!(!threshold.admits(level));
        }
    }

    #[test]
    fn test_numeric_name_compares_as_number() {
        let threshold = MinimumLevel::from("35").resolve();
        assert!(!threshold.admits(Level::Info));
        assert!(threshold.admits(Level::Warn));
        assert!(threshold.admits(Level::Error));
    }

    #[test]
    fn test_blank_name_reads_as_zero() {
        let threshold = MinimumLevel::from(" ").resolve();
        assert!(threshold.admits(Level::Debug));
    }

    #[test]
    fn test_inf_and_nan_spellings_admit_nothing() {
        for raw in ["-inf", "inf", "-infinity", "NaN", "nan"] {
            let threshold = MinimumLevel::from(raw).resolve();
            for level in Level::RANKED {
                assert!(!threshold.admits(level), "{:?} admitted {}", raw, level);
            }
        }
    }

    #[test]
    fn test_signed_infinity_spelled_out() {
        let low = MinimumLevel::from("-Infinity").resolve();
        assert!(low.admits(Level::Debug));

        let high = MinimumLevel::from("Infinity").resolve();
        assert!(!high.admits(Level::Error));
    }

    #[test]
    fn test_prefixed_integers_compare_by_value() {
        let hex = MinimumLevel::from("0x10").resolve();
        assert!(!hex.admits(Level::Debug));
        assert!(hex.admits(Level::Log));

        let binary = MinimumLevel::from(" 0b101000 ").resolve();
        assert!(!binary.admits(Level::Info));
        assert!(binary.admits(Level::Warn));

        assert!(!MinimumLevel::from("0x").resolve().admits(Level::Error));
        assert!(!MinimumLevel::from("-0x10").resolve().admits(Level::Error));
    }
}
