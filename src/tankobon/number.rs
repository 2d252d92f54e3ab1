//! # Ordinal numbers
//!
//! Volumes and chapters are numbered with an [`Ordinal`]: a whole number with an
//! optional decimal part used for sub-releases (chapter `7.2` sits between `7` and `8`).
//!
//! Names can carry their numbers as arabic digits (`"Vol 03"`, `"c7.2"`) or as roman
//! numerals (`"Tome XIV"`). Roman numerals are read leniently (`IIII` is 4) but always
//! written in the canonical subtractive form, and only cover `1..=4999`.
//!
//! Arabic values have no upper bound: an ISBN or a date glued to a chapter name is
//! still a number, and goes through inference like any other candidate.
//!
//! Equality and ordering use the pair `(whole, decimal or 0)`, so `7` and `7.0` compare
//! equal while `7.2` sorts after both.

use crate::error::{Result, TankobonError};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

static ARABIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid arabic pattern"));
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[IVXLCDM]+").expect("valid roman pattern"));

/// Canonical fragments per decimal place: units, tens, hundreds, thousands.
const ROMAN_PLACES: [&[&str]; 4] = [
    &["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"],
    &["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"],
    &["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"],
    &["", "M", "MM", "MMM", "MMMM"],
];

pub const ROMAN_MAX: u32 = 4999;

fn roman_digit(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Ordinal {
    whole: BigUint,
    decimal: Option<BigUint>,
}

impl Ordinal {
    pub fn new(whole: BigUint, decimal: Option<BigUint>) -> Self {
        Self { whole, decimal }
    }

    pub fn whole(&self) -> &BigUint {
        &self.whole
    }

    pub fn decimal(&self) -> Option<&BigUint> {
        self.decimal.as_ref()
    }

    /// A normal number has no decimal part; sub-releases are not normal.
    pub fn is_normal(&self) -> bool {
        self.decimal.is_none()
    }

    /// True when the value equals a whole number (`7` or `7.0`).
    pub fn is_integral(&self) -> bool {
        self.decimal.as_ref().map_or(true, Zero::is_zero)
    }

    /// Drop a decimal part equal to zero, so `7.0` becomes `7`.
    pub fn normalize(&mut self) {
        if self.decimal.as_ref().map_or(false, Zero::is_zero) {
            self.decimal = None;
        }
    }

    /// Replace the whole part, keeping any decimal part.
    pub fn set_whole(&mut self, whole: BigUint) {
        self.whole = whole;
    }

    /// The decimal part for comparisons, absent counting as zero.
    fn fraction(&self) -> Option<&BigUint> {
        self.decimal.as_ref().filter(|d| !d.is_zero())
    }

    /// Read a roman numeral (case-insensitive).
    ///
    /// Scans right to left keeping the highest digit seen so far. A digit at least as
    /// large is added; a smaller one is only valid as a subtractive `I`, `X` or `C` in
    /// front of a digit at most ten times larger.
    pub fn from_roman(text: &str) -> Result<u32> {
        if text.is_empty() {
            return Err(TankobonError::Parse("empty roman numeral".to_string()));
        }

        let mut value: u32 = 0;
        let mut highest: u32 = 0;
        for c in text.chars().rev() {
            let upper = c.to_ascii_uppercase();
            let v = roman_digit(upper).ok_or_else(|| {
                TankobonError::Parse(format!("invalid roman character [{}] in {}", c, text))
            })?;

            let out_of_order = || {
                TankobonError::Parse(format!(
                    "invalid roman numeral {} ({} out of order)",
                    text, c
                ))
            };

            if v >= highest {
                value = value.checked_add(v).ok_or_else(out_of_order)?;
                highest = v;
                continue;
            }

            if !matches!(v, 1 | 10 | 100) || highest / v > 10 {
                return Err(out_of_order());
            }
            value = value.checked_sub(v).ok_or_else(out_of_order)?;
        }
        Ok(value)
    }

    /// Write a value in canonical roman form. Only `1..=4999` is representable.
    pub fn to_roman(value: u32) -> Result<String> {
        if value == 0 || value > ROMAN_MAX {
            return Err(TankobonError::Range(BigUint::from(value)));
        }

        let mut places = Vec::with_capacity(4);
        let mut rest = value;
        let mut scale = 0;
        while rest > 0 {
            places.push(ROMAN_PLACES[scale][(rest % 10) as usize]);
            rest /= 10;
            scale += 1;
        }
        Ok(places.into_iter().rev().collect())
    }

    /// Every number appearing in `text`, left to right.
    ///
    /// With `roman` set, runs of uppercase roman letters are read instead of digits.
    pub fn extract(text: &str, roman: bool) -> Result<Vec<Ordinal>> {
        let pattern = if roman { &ROMAN } else { &ARABIC };
        pattern.find_iter(text).map(|m| m.as_str().parse()).collect()
    }

    pub fn to_arabic(&self, width: usize) -> String {
        match &self.decimal {
            Some(dec) => format!("{:0width$}.{}", self.whole, dec, width = width),
            None => format!("{:0width$}", self.whole, width = width),
        }
    }

    /// Arabic form that always shows a decimal part (`7` renders as `07.0` at width 2).
    pub fn to_decimal(&self, width: usize) -> String {
        match &self.decimal {
            Some(dec) => format!("{:0width$}.{}", self.whole, dec, width = width),
            None => format!("{:0width$}.0", self.whole, width = width),
        }
    }

    /// Roman form of the whole part; decimals are not representable.
    pub fn to_roman_string(&self) -> Result<String> {
        let value = self
            .whole
            .to_u32()
            .ok_or_else(|| TankobonError::Range(self.whole.clone()))?;
        Self::to_roman(value)
    }

    /// Render with a small format specification.
    ///
    /// - `""`, `"d"`, `"03d"`: arabic, zero padded to the given width
    /// - `"f"`, `"03f"`: arabic with a forced decimal part
    /// - `"r"`: roman
    pub fn render(&self, spec: &str) -> Result<String> {
        if spec == "r" {
            return self.to_roman_string();
        }
        if spec.is_empty() {
            return Ok(self.to_arabic(0));
        }

        let invalid = || TankobonError::Format(format!("invalid number format '{}'", spec));
        let kind = spec.chars().last().ok_or_else(invalid)?;
        let head = &spec[..spec.len() - kind.len_utf8()];
        let digits = head.trim_start_matches('0');
        let width = if digits.is_empty() {
            0
        } else {
            digits.parse::<usize>().map_err(|_| invalid())?
        };

        match kind {
            'd' => Ok(self.to_arabic(width)),
            'f' => Ok(self.to_decimal(width)),
            _ => Err(invalid()),
        }
    }
}

impl From<u32> for Ordinal {
    fn from(whole: u32) -> Self {
        Self::new(BigUint::from(whole), None)
    }
}

impl From<BigUint> for Ordinal {
    fn from(whole: BigUint) -> Self {
        Self::new(whole, None)
    }
}

impl FromStr for Ordinal {
    type Err = TankobonError;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || TankobonError::Parse(format!("'{}' is not a number", text));
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        if let Some((whole, dec)) = text.split_once('.') {
            if !is_digits(whole) || !is_digits(dec) {
                return Err(invalid());
            }
            let whole = whole.parse().map_err(|_| invalid())?;
            let dec = dec.parse().map_err(|_| invalid())?;
            return Ok(Self::new(whole, Some(dec)));
        }

        if is_digits(text) {
            return Ok(Self::new(text.parse().map_err(|_| invalid())?, None));
        }

        Ok(Self::from(Self::from_roman(text)?))
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decimal {
            Some(dec) => write!(f, "{}.{}", self.whole, dec),
            None => write!(f, "{}", self.whole),
        }
    }
}

impl PartialEq for Ordinal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ordinal {}

impl Hash for Ordinal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.whole.hash(state);
        self.fraction().hash(state);
    }
}

impl PartialOrd for Ordinal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ordinal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.whole
            .cmp(&other.whole)
            .then_with(|| self.fraction().cmp(&other.fraction()))
    }
}
