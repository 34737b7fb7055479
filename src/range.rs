//! Upper bound of the selectable range.
//!
//! The lower bound is fixed at 1. Every mutation keeps `upper_bound >= 1`,
//! and malformed text never surfaces as an error: it is normalized to
//! [`DEFAULT_UPPER_BOUND`] (unparsable) or to 1 (below the floor).

use crate::error::RangeInputError;

/// Bound used on startup and whenever the range field holds garbage.
pub const DEFAULT_UPPER_BOUND: u64 = 45;

/// Smallest allowed upper bound.
pub const MIN_UPPER_BOUND: u64 = 1;

/// Largest bound accepted from typed text. `increment` may step past it.
pub const MAX_TYPED_BOUND: u64 = u32::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    upper_bound: u64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl RangeConfig {
    /// Create a range, clamping `upper_bound` to the floor.
    #[cfg(test)]
    pub fn new(upper_bound: u64) -> Self {
        Self {
            upper_bound: upper_bound.max(MIN_UPPER_BOUND),
        }
    }

    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }

    pub fn increment(&mut self) {
        self.upper_bound = self.upper_bound.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        if self.upper_bound > MIN_UPPER_BOUND {
            self.upper_bound -= 1;
        }
    }

    /// Apply a direct text edit of the range field.
    ///
    /// Returns the bound now in effect.
    pub fn set_from_text(&mut self, text: &str) -> u64 {
        self.upper_bound = match Self::parse_bound(text) {
            Ok(bound) => bound,
            Err(RangeInputError::BelowMinimum(_)) => MIN_UPPER_BOUND,
            Err(RangeInputError::NotAnInteger(_)) => DEFAULT_UPPER_BOUND,
        };
        self.upper_bound
    }

    /// Parse range field text strictly.
    ///
    /// Accepts surrounding whitespace and an optional sign. Positive values
    /// above [`MAX_TYPED_BOUND`] clamp to it.
    pub fn parse_bound(text: &str) -> Result<u64, RangeInputError> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RangeInputError::NotAnInteger(text.to_string()));
        }

        if digits.bytes().all(|b| b == b'0') {
            return Err(RangeInputError::BelowMinimum("0".to_string()));
        }
        if negative {
            return Err(RangeInputError::BelowMinimum(trimmed.to_string()));
        }

        Ok(digits
            .parse::<u64>()
            .map_or(MAX_TYPED_BOUND, |bound| bound.min(MAX_TYPED_BOUND)))
    }
}
