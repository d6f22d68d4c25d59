//! Rota pattern model and parsing.
//!
//! A rota pattern is written as `<dutyDays>/<offDays>` (e.g. `"15/13"`) in
//! staff records and reports. The string form is parsed exactly once, at the
//! boundary where staff records are constructed or edited; the core only ever
//! sees the validated pair.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};

/// A validated duty cycle: a run of on-duty days followed by a run of off
/// days, repeating indefinitely from the staff member's anchor date.
///
/// Both segments are guaranteed positive; a zero-length segment cannot be
/// constructed. Serializes as its `"15/13"` label.
///
/// # Examples
///
/// ```
/// use rota_engine::models::RotaPattern;
///
/// let pattern: RotaPattern = "15/13".parse().unwrap();
/// assert_eq!(pattern.duty_days(), 15);
/// assert_eq!(pattern.off_days(), 13);
/// assert_eq!(pattern.cycle_length(), 28);
/// assert_eq!(pattern.to_string(), "15/13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RotaPattern {
    duty_days: u32,
    off_days: u32,
}

impl RotaPattern {
    /// Creates a pattern from duty and off day counts.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::InvalidPattern`] if either count is zero.
    pub fn new(duty_days: u32, off_days: u32) -> RotaResult<Self> {
        if duty_days == 0 || off_days == 0 {
            return Err(RotaError::InvalidPattern {
                pattern: format!("{duty_days}/{off_days}"),
                message: "day counts must be positive".to_string(),
            });
        }
        Ok(Self {
            duty_days,
            off_days,
        })
    }

    /// Parses a pattern string leniently, mapping any malformed or
    /// zero-segment input to `None`.
    ///
    /// This is the intake gate for untrusted pattern strings: a staff member
    /// whose pattern fails here carries no pattern and resolves to `off` on
    /// every date.
    ///
    /// # Examples
    ///
    /// ```
    /// use rota_engine::models::RotaPattern;
    ///
    /// assert!(RotaPattern::parse_lenient("15/13").is_some());
    /// assert!(RotaPattern::parse_lenient("0/5").is_none());
    /// assert!(RotaPattern::parse_lenient("abc/13").is_none());
    /// assert!(RotaPattern::parse_lenient("").is_none());
    /// ```
    pub fn parse_lenient(pattern: &str) -> Option<Self> {
        pattern.parse().ok()
    }

    /// The number of consecutive on-duty days at the start of each cycle.
    pub fn duty_days(&self) -> u32 {
        self.duty_days
    }

    /// The number of consecutive off days completing each cycle.
    pub fn off_days(&self) -> u32 {
        self.off_days
    }

    /// The total cycle length in days.
    pub fn cycle_length(&self) -> u32 {
        self.duty_days + self.off_days
    }
}

impl FromStr for RotaPattern {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| RotaError::InvalidPattern {
            pattern: s.to_string(),
            message: message.to_string(),
        };

        let (duty, off) = s
            .split_once('/')
            .ok_or_else(|| invalid("expected '<dutyDays>/<offDays>'"))?;
        let duty_days: u32 = duty
            .trim()
            .parse()
            .map_err(|_| invalid("duty days is not a number"))?;
        let off_days: u32 = off
            .trim()
            .parse()
            .map_err(|_| invalid("off days is not a number"))?;

        RotaPattern::new(duty_days, off_days)
    }
}

impl std::fmt::Display for RotaPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.duty_days, self.off_days)
    }
}

impl TryFrom<String> for RotaPattern {
    type Error = RotaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RotaPattern> for String {
    fn from(pattern: RotaPattern) -> Self {
        pattern.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pattern() {
        let pattern: RotaPattern = "15/13".parse().unwrap();
        assert_eq!(pattern.duty_days(), 15);
        assert_eq!(pattern.off_days(), 13);
        assert_eq!(pattern.cycle_length(), 28);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let pattern: RotaPattern = " 7 / 7 ".parse().unwrap();
        assert_eq!(pattern.cycle_length(), 14);
    }

    #[test]
    fn test_zero_duty_days_rejected() {
        assert!("0/5".parse::<RotaPattern>().is_err());
        assert!(RotaPattern::new(0, 5).is_err());
    }

    #[test]
    fn test_zero_off_days_rejected() {
        assert!("15/0".parse::<RotaPattern>().is_err());
        assert!(RotaPattern::new(15, 0).is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = "abc/13".parse::<RotaPattern>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rota pattern 'abc/13': duty days is not a number"
        );
    }

    #[test]
    fn test_missing_separator_rejected() {
        assert!("15".parse::<RotaPattern>().is_err());
        assert!("".parse::<RotaPattern>().is_err());
    }

    #[test]
    fn test_negative_rejected() {
        assert!("-15/13".parse::<RotaPattern>().is_err());
    }

    #[test]
    fn test_parse_lenient_maps_failures_to_none() {
        assert_eq!(
            RotaPattern::parse_lenient("15/13"),
            Some(RotaPattern::new(15, 13).unwrap())
        );
        assert_eq!(RotaPattern::parse_lenient("0/5"), None);
        assert_eq!(RotaPattern::parse_lenient("abc/13"), None);
        assert_eq!(RotaPattern::parse_lenient(""), None);
        assert_eq!(RotaPattern::parse_lenient("15/13/2"), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let pattern = RotaPattern::new(15, 13).unwrap();
        assert_eq!(serde_json::to_string(&pattern).unwrap(), "\"15/13\"");

        let parsed: RotaPattern = serde_json::from_str("\"15/13\"").unwrap();
        assert_eq!(parsed, pattern);
    }

    #[test]
    fn test_deserialization_rejects_malformed_label() {
        assert!(serde_json::from_str::<RotaPattern>("\"0/5\"").is_err());
    }
}
