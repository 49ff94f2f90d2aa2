//! Tracking-number extraction from free text.
//!
//! The message is upper-cased and scanned with three shape rules in a fixed order.
//! The first rule that matches anywhere wins, and its leftmost match is returned.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Carrier prefix plus digits, e.g. `FDE123456789`.
static CARRIER_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,3}[0-9]{8,12}\b").unwrap());

/// Bare numeric receipt, e.g. `1234567890123`.
static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[0-9]{10,15}\b").unwrap());

/// Any alphanumeric token; only mixed letter/digit candidates are accepted.
static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z0-9]{8,15}\b").unwrap());

/// The shape rule that produced a match, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingPattern {
    CarrierCode,
    Numeric,
    Alphanumeric,
}

impl TrackingPattern {
    pub const PRIORITY: [TrackingPattern; 3] = [
        TrackingPattern::CarrierCode,
        TrackingPattern::Numeric,
        TrackingPattern::Alphanumeric,
    ];

    fn find(self, haystack: &str) -> Option<&str> {
        match self {
            TrackingPattern::CarrierCode => CARRIER_CODE_RE.find(haystack).map(|m| m.as_str()),
            TrackingPattern::Numeric => NUMERIC_RE.find(haystack).map(|m| m.as_str()),
            TrackingPattern::Alphanumeric => ALPHANUMERIC_RE
                .find_iter(haystack)
                .map(|m| m.as_str())
                .find(|token| is_mixed(token)),
        }
    }
}

fn is_mixed(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit()) && token.bytes().any(|b| b.is_ascii_uppercase())
}

/// A tracking number found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingMatch {
    pub number: String,
    pub pattern: TrackingPattern,
}

/// Scans `text` for a tracking-number-shaped token.
///
/// Returns `None` when nothing matches; that is a normal outcome, not an error.
pub fn find_tracking_number(text: &str) -> Option<TrackingMatch> {
    let upper = text.to_uppercase();
    TrackingPattern::PRIORITY.into_iter().find_map(|pattern| {
        pattern.find(&upper).map(|number| {
            debug!(?pattern, number, "Tracking number extracted");
            TrackingMatch {
                number: number.to_string(),
                pattern,
            }
        })
    })
}

/// Convenience wrapper returning just the upper-cased tracking number.
pub fn extract_tracking_number(text: &str) -> Option<String> {
    find_tracking_number(text).map(|m| m.number)
}
