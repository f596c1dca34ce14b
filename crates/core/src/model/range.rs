use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("range start {min} is greater than range end {max}")]
    Inverted { min: i32, max: i32 },

    #[error("invalid range `{raw}`, expected MIN..MAX")]
    Parse { raw: String },
}

//
// ─── OPERAND RANGE ─────────────────────────────────────────────────────────────
//

/// Inclusive interval of integers bounding one side of a multiplication.
///
/// Construction does not check that `min <= max`. An inverted range is a
/// legal value that simply contains no operands; use [`OperandRange::ensure_ordered`]
/// when a caller wants to reject it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperandRange {
    min: i32,
    max: i32,
}

impl OperandRange {
    /// Default range for the multiplicand side.
    pub const DEFAULT_FIRST: Self = Self::new(11, 30);
    /// Default range for the multiplier side.
    pub const DEFAULT_SECOND: Self = Self::new(1, 10);

    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Number of operands in the range, zero when inverted.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_inverted() {
            return 0;
        }
        let span = i64::from(self.max) - i64::from(self.min) + 1;
        usize::try_from(span).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Operands in ascending order.
    #[must_use]
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Rejects inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Inverted` if `min > max`.
    pub fn ensure_ordered(&self) -> Result<(), RangeError> {
        if self.is_inverted() {
            return Err(RangeError::Inverted {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for OperandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

impl FromStr for OperandRange {
    type Err = RangeError;

    /// Parses `MIN..MAX` (an `..=` separator is accepted too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || RangeError::Parse { raw: s.to_string() };

        let (min, max) = s.split_once("..").ok_or_else(parse_err)?;
        let max = max.strip_prefix('=').unwrap_or(max);
        let min = min.trim().parse::<i32>().map_err(|_| parse_err())?;
        let max = max.trim().parse::<i32>().map_err(|_| parse_err())?;

        Ok(Self::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_inclusive_bounds() {
        assert_eq!(OperandRange::new(11, 30).len(), 20);
        assert_eq!(OperandRange::new(1, 1).len(), 1);
        assert_eq!(OperandRange::new(-3, 3).len(), 7);
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let range = OperandRange::new(5, 2);
        assert!(range.is_inverted());
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
        assert_eq!(
            range.ensure_ordered().unwrap_err(),
            RangeError::Inverted { min: 5, max: 2 }
        );
    }

    #[test]
    fn full_i32_span_does_not_overflow() {
        let range = OperandRange::new(i32::MIN, i32::MAX);
        assert_eq!(range.len(), 1_usize << 32);
    }

    #[test]
    fn parses_dotted_forms() {
        assert_eq!("11..30".parse::<OperandRange>().unwrap(), OperandRange::new(11, 30));
        assert_eq!(" -5 ..= -1 ".parse::<OperandRange>().unwrap(), OperandRange::new(-5, -1));
        assert_eq!("7..3".parse::<OperandRange>().unwrap(), OperandRange::new(7, 3));
    }

    #[test]
    fn rejects_malformed_text() {
        for raw in ["", "10", "a..b", "1...2", "1..", "..4"] {
            let err = raw.parse::<OperandRange>().unwrap_err();
            assert_eq!(err, RangeError::Parse { raw: raw.to_string() });
        }
    }

    #[test]
    fn display_parses_back() {
        let range = OperandRange::new(-2, 9);
        assert_eq!(range.to_string(), "-2..9");
        assert_eq!(range.to_string().parse::<OperandRange>().unwrap(), range);
    }
}
