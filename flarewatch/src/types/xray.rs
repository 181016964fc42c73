//! Classified X-ray flux reading type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// GOES X-ray class letter.
///
/// Classes form a logarithmic scale: each step up is a tenfold increase
/// in flux. An unrecognized letter is carried as `Unknown` and compares
/// as negligible flux (multiplier 0) rather than failing the cycle, so
/// a feed hiccup can never crash the monitor. Callers that care can
/// still tell the two cases apart via [`is_known`](Self::is_known).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrayClass {
    A,
    B,
    C,
    M,
    X,
    Unknown(char),
}

impl XrayClass {
    pub fn from_letter(letter: char) -> Self {
        match letter.to_ascii_uppercase() {
            'A' => XrayClass::A,
            'B' => XrayClass::B,
            'C' => XrayClass::C,
            'M' => XrayClass::M,
            'X' => XrayClass::X,
            other => XrayClass::Unknown(other),
        }
    }

    /// Flux multiplier (W/m²) for magnitude 1.0 of this class.
    pub fn multiplier(self) -> f64 {
        match self {
            XrayClass::A => 1e-8,
            XrayClass::B => 1e-7,
            XrayClass::C => 1e-6,
            XrayClass::M => 1e-5,
            XrayClass::X => 1e-4,
            XrayClass::Unknown(_) => 0.0,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, XrayClass::Unknown(_))
    }

    fn letter(self) -> char {
        match self {
            XrayClass::A => 'A',
            XrayClass::B => 'B',
            XrayClass::C => 'C',
            XrayClass::M => 'M',
            XrayClass::X => 'X',
            XrayClass::Unknown(c) => c,
        }
    }
}

/// A classified solar X-ray flux reading, e.g. `M5.2`.
///
/// A class letter plus a linear magnitude within that class. Immutable
/// once parsed. Comparisons go through [`comparable`](Self::comparable)
/// on both sides, so they are consistent across classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrayReading {
    pub class: XrayClass,
    pub magnitude: f64,
}

impl XrayReading {
    /// Flux in W/m², `magnitude × class multiplier`.
    ///
    /// Used only for ordering. Never display this value; show the
    /// classified form instead.
    pub fn comparable(&self) -> f64 {
        self.magnitude * self.class.multiplier()
    }

    /// Whether this reading meets or exceeds the threshold.
    pub fn is_above(&self, threshold: &XrayReading) -> bool {
        self.comparable() >= threshold.comparable()
    }
}

impl FromStr for XrayReading {
    type Err = Error;

    /// Parse the feed form `<letter><magnitude>`, e.g. `"M5.2"`.
    ///
    /// The letter is case-insensitive; an unrecognized letter yields an
    /// `Unknown` class, not an error. A missing, negative, or
    /// non-numeric magnitude is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| Error::MalformedReading(s.to_string()))?;
        let magnitude: f64 = chars
            .as_str()
            .parse()
            .map_err(|_| Error::MalformedReading(s.to_string()))?;
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(Error::MalformedReading(s.to_string()));
        }
        Ok(XrayReading {
            class: XrayClass::from_letter(letter),
            magnitude,
        })
    }
}

impl PartialOrd for XrayReading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.comparable().partial_cmp(&other.comparable())
    }
}

impl fmt::Display for XrayReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole magnitudes keep one decimal ("M5.0"), matching the feed.
        if self.magnitude.fract() == 0.0 {
            write!(f, "{}{:.1}", self.class.letter(), self.magnitude)
        } else {
            write!(f, "{}{}", self.class.letter(), self.magnitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parses_feed_form() {
        let r: XrayReading = "M5.2".parse().unwrap();
        assert_eq!(r.class, XrayClass::M);
        assert_eq!(r.magnitude, 5.2);
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        let r: XrayReading = " m5.2 ".parse().unwrap();
        assert_eq!(r.class, XrayClass::M);
    }

    #[test_case("" ; "empty")]
    #[test_case("M" ; "missing magnitude")]
    #[test_case("Mx.y" ; "non numeric magnitude")]
    #[test_case("M-5.0" ; "negative magnitude")]
    fn rejects_malformed_input(input: &str) {
        assert!(input.parse::<XrayReading>().is_err());
    }

    #[test]
    fn unknown_class_is_negligible_not_an_error() {
        let r: XrayReading = "Z9.9".parse().unwrap();
        assert_eq!(r.class, XrayClass::Unknown('Z'));
        assert!(!r.class.is_known());
        assert_eq!(r.comparable(), 0.0);
    }

    #[test]
    fn comparable_scales_by_class() {
        let m5: XrayReading = "M5.0".parse().unwrap();
        assert_eq!(m5.comparable(), 5.0e-5);
    }

    #[test]
    fn classes_are_monotonic_at_equal_magnitude() {
        let classes = [
            XrayClass::A,
            XrayClass::B,
            XrayClass::C,
            XrayClass::M,
            XrayClass::X,
        ];
        for pair in classes.windows(2) {
            let lower = XrayReading {
                class: pair[0],
                magnitude: 5.0,
            };
            let higher = XrayReading {
                class: pair[1],
                magnitude: 5.0,
            };
            assert!(higher > lower, "{higher} should exceed {lower}");
        }
    }

    #[test_case("M6.0", "M5.0", true ; "above")]
    #[test_case("M5.0", "M5.0", true ; "equal counts as above")]
    #[test_case("C3.0", "M5.0", false ; "below")]
    #[test_case("X1.0", "M5.0", true ; "higher class smaller magnitude")]
    fn threshold_comparison(reading: &str, threshold: &str, expected: bool) {
        let r: XrayReading = reading.parse().unwrap();
        let t: XrayReading = threshold.parse().unwrap();
        assert_eq!(r.is_above(&t), expected);
        // The comparison is definitionally the comparable-value ordering.
        assert_eq!(r.is_above(&t), r.comparable() >= t.comparable());
    }

    #[test]
    fn displays_classified_form() {
        let r: XrayReading = "M5.2".parse().unwrap();
        assert_eq!(r.to_string(), "M5.2");

        let whole: XrayReading = "M5.0".parse().unwrap();
        assert_eq!(whole.to_string(), "M5.0");
    }
}
