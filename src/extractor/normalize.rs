//! Conversion of free-text field values into integers.
//!
//! Every function maps the `"Unknown"` sentinel to zero without looking at
//! it further. Values that do not have the expected shape also give zero.

use crate::patterns::{DIGIT_RUN, LEADING_DIGITS};
use crate::result::UNKNOWN;

/// Year, month and day taken positionally from a birth date string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Height in inches from a feet-and-inches string.
///
/// Needs at least two digit groups: `"6' 2\""` is 74, `"6'"` is 0.
#[must_use]
pub fn height_inches(height: &str) -> u32 {
    if height == UNKNOWN {
        return 0;
    }
    let groups = digit_groups(height);
    match groups.as_slice() {
        [feet, inches, ..] => feet.saturating_mul(12).saturating_add(*inches),
        _ => 0,
    }
}

/// Weight from the digit run at the very start of the value.
///
/// `"195 lbs"` is 195; `"approx. 195"` is 0.
#[must_use]
pub fn weight(weight: &str) -> u32 {
    if weight == UNKNOWN {
        return 0;
    }
    LEADING_DIGITS
        .find(weight)
        .map_or(0, |m| parse_group(m.as_str()))
}

/// Birth date parts from the digit groups in order of appearance.
///
/// No calendar validation: `"1994-13-40"` gives month 13 and day 40.
#[must_use]
pub fn birth_date(birthdate: &str) -> BirthDate {
    if birthdate == UNKNOWN {
        return BirthDate::default();
    }
    let mut groups = digit_groups(birthdate).into_iter();
    BirthDate {
        year: groups.next().unwrap_or(0),
        month: groups.next().unwrap_or(0),
        day: groups.next().unwrap_or(0),
    }
}

fn digit_groups(value: &str) -> Vec<u32> {
    DIGIT_RUN
        .find_iter(value)
        .map(|m| parse_group(m.as_str()))
        .collect()
}

/// A digit run too long for `u32` counts as 0.
fn parse_group(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_feet_and_inches() {
        assert_eq!(height_inches("6' 2\""), 74);
        assert_eq!(height_inches("6' 2"), 74);
        assert_eq!(height_inches("5-11"), 71);
        assert_eq!(height_inches("6 ft 0 in (183 cm)"), 72);
    }

    #[test]
    fn height_needs_two_groups() {
        assert_eq!(height_inches("6'"), 0);
        assert_eq!(height_inches("tall"), 0);
        assert_eq!(height_inches(""), 0);
    }

    #[test]
    fn weight_leading_digits_only() {
        assert_eq!(weight("195 lbs"), 195);
        assert_eq!(weight("180"), 180);
        assert_eq!(weight("lbs 195"), 0);
        assert_eq!(weight(" 195"), 0);
        assert_eq!(weight(""), 0);
    }

    #[test]
    fn birth_date_positional() {
        assert_eq!(
            birth_date("1994-03-15"),
            BirthDate { year: 1994, month: 3, day: 15 }
        );
        assert_eq!(
            birth_date("1994/7"),
            BirthDate { year: 1994, month: 7, day: 0 }
        );
        assert_eq!(
            birth_date("circa 1901"),
            BirthDate { year: 1901, month: 0, day: 0 }
        );
        assert_eq!(birth_date("no digits"), BirthDate::default());
    }

    #[test]
    fn birth_date_is_not_validated() {
        assert_eq!(
            birth_date("1994-13-40"),
            BirthDate { year: 1994, month: 13, day: 40 }
        );
    }

    #[test]
    fn unknown_is_zero_everywhere() {
        assert_eq!(height_inches(UNKNOWN), 0);
        assert_eq!(weight(UNKNOWN), 0);
        assert_eq!(birth_date(UNKNOWN), BirthDate::default());
    }

    #[test]
    fn oversized_digit_runs_do_not_panic() {
        assert_eq!(weight("99999999999999999999 lbs"), 0);
        assert_eq!(height_inches("99999999999' 2"), 2);
    }
}
