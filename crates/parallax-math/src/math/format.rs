// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Human-readable, locale-aware formatting of vector components.
//!
//! Formatting never consults process-wide state. The caller passes a
//! [`Locale`] explicitly, and when none is given [`Locale::INVARIANT`] is
//! used, so output is deterministic across machines.

use std::fmt;
use std::str::FromStr;

use super::Vec3;
use crate::error::{Error, Result};

/// Largest precision accepted by a [`NumberStyle`].
pub const MAX_PRECISION: u32 = 99;

/// A numeric format style, parsed from a short format string such as
/// `"F2"`, `"N0"`, `"E3"`, `"G5"` or `"P1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// Shortest representation that round-trips (`G`, `G0` or empty).
    #[default]
    General,
    /// General formatting limited to `n` significant digits (`G<n>`).
    Significant(u32),
    /// Fixed-point with a number of decimals (`F<n>`, default 2).
    Fixed(u32),
    /// Fixed-point with group separators (`N<n>`, default 2).
    Number(u32),
    /// Scientific notation with a three digit exponent (`E<n>`, default 6).
    Exponential {
        /// Digits after the decimal point of the mantissa.
        decimals: u32,
        /// Whether the exponent marker is `E` rather than `e`.
        uppercase: bool,
    },
    /// The value multiplied by 100, followed by ` %` (`P<n>`, default 2).
    Percent(u32),
}

impl NumberStyle {
    /// Parses a format style string.
    ///
    /// An empty string selects [`NumberStyle::General`].
    ///
    /// # Examples
    ///
    /// ```
    /// use parallax_math::math::NumberStyle;
    /// assert_eq!(NumberStyle::parse("F3").unwrap(), NumberStyle::Fixed(3));
    /// assert_eq!(NumberStyle::parse("n").unwrap(), NumberStyle::Number(2));
    /// assert!(NumberStyle::parse("Q").is_err());
    /// ```
    pub fn parse(style: &str) -> Result<Self> {
        let trimmed = style.trim();
        let mut chars = trimmed.chars();
        let Some(specifier) = chars.next() else {
            return Ok(Self::General);
        };
        let digits = chars.as_str();

        let precision = if digits.is_empty() {
            None
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            let precision = digits.parse::<u32>().unwrap_or(u32::MAX);
            if precision > MAX_PRECISION {
                return Err(Error::PrecisionOutOfRange {
                    precision,
                    max: MAX_PRECISION,
                });
            }
            Some(precision)
        } else {
            return Err(Error::InvalidFormatStyle {
                style: style.to_string(),
                reason: "precision must be a decimal number",
            });
        };

        match specifier {
            'G' | 'g' => Ok(match precision {
                None | Some(0) => Self::General,
                Some(n) => Self::Significant(n),
            }),
            'F' | 'f' => Ok(Self::Fixed(precision.unwrap_or(2))),
            'N' | 'n' => Ok(Self::Number(precision.unwrap_or(2))),
            'E' | 'e' => Ok(Self::Exponential {
                decimals: precision.unwrap_or(6),
                uppercase: specifier == 'E',
            }),
            'P' | 'p' => Ok(Self::Percent(precision.unwrap_or(2))),
            _ => Err(Error::InvalidFormatStyle {
                style: style.to_string(),
                reason: "unknown specifier",
            }),
        }
    }

    /// Formats a single value in this style for the given locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use parallax_math::math::{Locale, NumberStyle};
    /// assert_eq!(NumberStyle::Number(1).format(-12345.67, &Locale::DE_DE), "-12.345,7");
    /// assert_eq!(NumberStyle::Exponential { decimals: 2, uppercase: true }
    ///     .format(1234.5, &Locale::INVARIANT), "1.23E+003");
    /// ```
    pub fn format(&self, value: f32, locale: &Locale) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 {
                "Infinity".to_string()
            } else {
                format!("{}Infinity", locale.negative_sign)
            };
        }

        let raw = match *self {
            Self::General => format!("{value}"),
            Self::Significant(digits) => significant(value, digits),
            Self::Fixed(decimals) | Self::Number(decimals) => {
                format!("{value:.prec$}", prec = decimals as usize)
            }
            Self::Exponential {
                decimals,
                uppercase,
            } => exponential(value, decimals, if uppercase { 'E' } else { 'e' }, 3),
            Self::Percent(decimals) => {
                format!("{:.prec$}", value * 100.0, prec = decimals as usize)
            }
        };

        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.as_str()),
        };
        let (int_part, fraction) = match body.split_once('.') {
            Some((int_part, fraction)) => (int_part, Some(fraction)),
            None => (body, None),
        };

        let mut out = String::with_capacity(raw.len() + 4);
        if negative {
            out.push_str(locale.negative_sign);
        }
        if matches!(self, Self::Number(_)) {
            push_grouped(&mut out, int_part, locale.group_separator);
        } else {
            out.push_str(int_part);
        }
        if let Some(fraction) = fraction {
            out.push_str(locale.decimal_separator);
            out.push_str(fraction);
        }
        if matches!(self, Self::Percent(_)) {
            out.push_str(" %");
        }
        out
    }
}

impl FromStr for NumberStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Formats `value` in scientific notation, zero-padding the exponent to
/// `exp_width` digits (`1.50E+003`).
fn exponential(value: f32, decimals: u32, marker: char, exp_width: usize) -> String {
    let sci = format!("{value:.prec$e}", prec = decimals as usize);
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!(
                "{mantissa}{marker}{sign}{:0width$}",
                exp.unsigned_abs(),
                width = exp_width
            )
        }
        None => sci,
    }
}

/// Formats `value` with `digits` significant digits, switching to
/// scientific notation for very large or very small magnitudes.
fn significant(value: f32, digits: u32) -> String {
    let digits = digits.max(1);
    let sci = format!("{value:.prec$e}", prec = (digits - 1) as usize);
    let exp: i32 = sci
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);

    if exp >= -5 && exp < digits as i32 {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction_zeros(format!("{value:.decimals$}"))
    } else {
        let formatted = exponential(value, digits - 1, 'E', 2);
        match formatted.split_once('E') {
            Some((mantissa, exp)) => {
                format!("{}E{exp}", trim_fraction_zeros(mantissa.to_string()))
            }
            None => formatted,
        }
    }
}

fn trim_fraction_zeros(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

fn push_grouped(out: &mut String, digits: &str, separator: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
}

// --- Locale ---

/// The separators used when rendering numbers for a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// The culture tag, e.g. `"de-DE"`. Empty for the invariant culture.
    pub name: &'static str,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: &'static str,
    /// Separator between digit groups of the integer part.
    pub group_separator: &'static str,
    /// Prefix for negative values.
    pub negative_sign: &'static str,
}

impl Locale {
    /// Culture-neutral formatting: `.` decimals, `,` groups.
    pub const INVARIANT: Self = Self::new("", ".", ",", "-");
    /// English (United States).
    pub const EN_US: Self = Self::new("en-US", ".", ",", "-");
    /// German (Germany).
    pub const DE_DE: Self = Self::new("de-DE", ",", ".", "-");
    /// French (France). Groups use a narrow no-break space.
    pub const FR_FR: Self = Self::new("fr-FR", ",", "\u{202f}", "-");

    const KNOWN: [Self; 4] = [Self::INVARIANT, Self::EN_US, Self::DE_DE, Self::FR_FR];

    /// Creates a locale from its separators.
    pub const fn new(
        name: &'static str,
        decimal_separator: &'static str,
        group_separator: &'static str,
        negative_sign: &'static str,
    ) -> Self {
        Self {
            name,
            decimal_separator,
            group_separator,
            negative_sign,
        }
    }

    /// Looks up a built-in locale by its tag.
    ///
    /// Matching ignores case and accepts `_` in place of `-`. The empty tag
    /// and `"invariant"` select [`Locale::INVARIANT`].
    pub fn from_tag(tag: &str) -> Result<Self> {
        let normalized = tag.trim().replace('_', "-");
        if normalized.is_empty() || normalized.eq_ignore_ascii_case("invariant") {
            return Ok(Self::INVARIANT);
        }
        Self::KNOWN
            .into_iter()
            .find(|locale| locale.name.eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| {
                log::debug!("No built-in locale for tag '{tag}'");
                Error::UnknownLocale(tag.to_string())
            })
    }
}

impl Default for Locale {
    /// Returns [`Locale::INVARIANT`].
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

// --- Vec3 Formatting ---

impl Vec3 {
    /// Formats the vector as `"X:<x> Y:<y> Z:<z>"`.
    ///
    /// A missing `style` falls back to [`NumberStyle::General`] and a
    /// missing `locale` to [`Locale::INVARIANT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use parallax_math::math::{Locale, NumberStyle, Vec3};
    /// let v = Vec3::new(1.5, -2.0, 0.25);
    /// assert_eq!(v.to_string_with(None, None), "X:1.5 Y:-2 Z:0.25");
    /// assert_eq!(
    ///     v.to_string_with(Some(&NumberStyle::Fixed(2)), Some(&Locale::DE_DE)),
    ///     "X:1,50 Y:-2,00 Z:0,25"
    /// );
    /// ```
    pub fn to_string_with(&self, style: Option<&NumberStyle>, locale: Option<&Locale>) -> String {
        let style = style.copied().unwrap_or_default();
        let locale = locale.copied().unwrap_or_default();
        format!(
            "X:{} Y:{} Z:{}",
            style.format(self.x, &locale),
            style.format(self.y, &locale),
            style.format(self.z, &locale)
        )
    }
}

impl fmt::Display for Vec3 {
    /// Formats with the invariant locale. A precision (`{:.2}`) selects
    /// fixed-point output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match f.precision() {
            Some(decimals) => NumberStyle::Fixed(decimals as u32),
            None => NumberStyle::General,
        };
        f.write_str(&self.to_string_with(Some(&style), None))
    }
}
