//! # Canonical Size
//!
//! Normalized matching key for physical billboard dimensions.
//!
//! Sizes arrive in many spellings (`"12X4"`, `"4 × 12"`, `"4x12 m"`). They
//! are reduced to `"<small>x<large>"` so that every spelling of the same
//! pair of dimensions matches the same tariff rows.
//!
//! Canonicalization is permissive: it never fails. Input that does not
//! reduce to exactly two numbers is kept in its stripped form.
//!
//! # Examples
//!
//! ```
//! use billboard_pricing::domain::value_objects::CanonicalSize;
//!
//! assert_eq!(CanonicalSize::parse("12X4").as_str(), "4x12");
//! assert_eq!(CanonicalSize::parse("4 × 12").as_str(), "4x12");
//! assert_eq!(CanonicalSize::parse("").as_str(), "4x12");
//! assert_eq!(CanonicalSize::parse("3x4x5").as_str(), "3x4x5");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used in canonical sizes.
pub const SIZE_SEPARATOR: char = 'x';

/// Size assumed when the caller supplies none.
pub const DEFAULT_SIZE: &str = "4x12";

/// A size string reduced to its matching key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalSize(String);

impl CanonicalSize {
    /// Canonicalizes a raw size string.
    ///
    /// 1. Lowercase, and map `×` to the separator.
    /// 2. Keep only ASCII digits and the separator.
    /// 3. Exactly two non-empty numeric segments are sorted ascending and
    ///    joined as `"<small>x<large>"`; anything else is returned stripped.
    ///
    /// Empty input yields [`DEFAULT_SIZE`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self(DEFAULT_SIZE.to_string());
        }

        let stripped: String = raw
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == '×' { SIZE_SEPARATOR } else { c })
            .filter(|c| c.is_ascii_digit() || *c == SIZE_SEPARATOR)
            .collect();

        match Self::numeric_pair(&stripped) {
            Some((a, b)) => {
                let (small, large) = if a <= b { (a, b) } else { (b, a) };
                Self(format!("{small}{SIZE_SEPARATOR}{large}"))
            }
            None => Self(stripped),
        }
    }

    /// Canonicalizes an optional size, treating `None` as empty input.
    #[must_use]
    pub fn parse_optional(raw: Option<&str>) -> Self {
        Self::parse(raw.unwrap_or_default())
    }

    fn numeric_pair(stripped: &str) -> Option<(u64, u64)> {
        let mut segments = stripped.split(SIZE_SEPARATOR).filter(|s| !s.is_empty());
        let first = segments.next()?.parse().ok()?;
        let second = segments.next()?.parse().ok()?;
        if segments.next().is_some() {
            return None;
        }
        Some((first, second))
    }

    /// Returns the canonical string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `(small, large)` dimensions when the key is a valid pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use billboard_pricing::domain::value_objects::CanonicalSize;
    ///
    /// assert_eq!(CanonicalSize::parse("12x4").dimensions(), Some((4, 12)));
    /// assert_eq!(CanonicalSize::parse("abc").dimensions(), None);
    /// ```
    #[must_use]
    pub fn dimensions(&self) -> Option<(u64, u64)> {
        Self::numeric_pair(&self.0)
    }

    /// Returns true if the key reduced to a valid `"<small>x<large>"` pair.
    #[inline]
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.dimensions().is_some()
    }
}

impl Default for CanonicalSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE.to_string())
    }
}

impl fmt::Display for CanonicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalSize {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CanonicalSize {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn already_canonical() {
            assert_eq!(CanonicalSize::parse("3x4").as_str(), "3x4");
        }

        #[test]
        fn sorts_dimensions() {
            assert_eq!(CanonicalSize::parse("12x4").as_str(), "4x12");
            assert_eq!(CanonicalSize::parse("6x3").as_str(), "3x6");
        }

        #[test]
        fn separator_variants() {
            for raw in ["4x12", "4X12", "4×12", "12 × 4", " 4 x 12 ", "4X 12m"] {
                assert_eq!(CanonicalSize::parse(raw).as_str(), "4x12", "input {raw:?}");
            }
        }

        #[test]
        fn equal_dimensions() {
            assert_eq!(CanonicalSize::parse("5x5").as_str(), "5x5");
        }

        #[test]
        fn leading_zeros_are_normalized() {
            assert_eq!(CanonicalSize::parse("04x012").as_str(), "4x12");
        }

        #[test]
        fn empty_defaults() {
            assert_eq!(CanonicalSize::parse("").as_str(), DEFAULT_SIZE);
            assert_eq!(CanonicalSize::parse_optional(None).as_str(), DEFAULT_SIZE);
        }

        #[test]
        fn whitespace_only_is_not_defaulted() {
            assert_eq!(CanonicalSize::parse("   ").as_str(), "");
        }

        #[test]
        fn single_number_kept_stripped() {
            assert_eq!(CanonicalSize::parse("12 m").as_str(), "12");
        }

        #[test]
        fn three_numbers_kept_stripped() {
            assert_eq!(CanonicalSize::parse("3 x 4 x 5").as_str(), "3x4x5");
        }

        #[test]
        fn empty_segments_ignored() {
            assert_eq!(CanonicalSize::parse("x12xx4x").as_str(), "4x12");
        }

        #[test]
        fn decimal_point_is_stripped() {
            assert_eq!(CanonicalSize::parse("2.5x10").as_str(), "10x25");
        }

        #[test]
        fn non_ascii_digits_are_stripped() {
            assert_eq!(CanonicalSize::parse("٤x١٢").as_str(), "x");
        }

        #[test]
        fn oversized_number_kept_stripped() {
            let raw = "99999999999999999999999x4";
            assert_eq!(CanonicalSize::parse(raw).as_str(), raw);
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn dimensions() {
            assert_eq!(CanonicalSize::parse("4x12").dimensions(), Some((4, 12)));
            assert!(CanonicalSize::parse("4x12").is_pair());
            assert!(!CanonicalSize::parse("12").is_pair());
        }

        #[test]
        fn default_is_default_size() {
            assert_eq!(CanonicalSize::default().as_str(), DEFAULT_SIZE);
        }

        #[test]
        fn display_and_from() {
            let size: CanonicalSize = "12X4".into();
            assert_eq!(size.to_string(), "4x12");
        }

        #[test]
        fn serde_transparent() {
            let size = CanonicalSize::parse("4x12");
            assert_eq!(serde_json::to_string(&size).unwrap(), "\"4x12\"");
        }
    }
}
