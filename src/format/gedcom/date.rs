// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two supported dialects. Everything that renders or reads a date
/// dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GedcomVersion {
    #[default]
    V551,
    V70,
}

impl GedcomVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V551 => "5.5.1",
            Self::V70 => "7.0",
        }
    }
}

impl fmt::Display for GedcomVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGedcomVersionError;

impl fmt::Display for ParseGedcomVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid gedcom version (expected \"5.5.1\" or \"7.0\")")
    }
}

impl std::error::Error for ParseGedcomVersionError {}

impl FromStr for GedcomVersion {
    type Err = ParseGedcomVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5.5.1" => Ok(Self::V551),
            "7.0" => Ok(Self::V70),
            _ => Err(ParseGedcomVersionError),
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Leading date modifier, kept separate from the numeric fields so a
/// qualified date never pretends to be exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateQualifier {
    About,
    Before,
    After,
    Between,
}

impl DateQualifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "ABT",
            Self::Before => "BEF",
            Self::After => "AFT",
            Self::Between => "BET",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("ABT") {
            Some(Self::About)
        } else if token.eq_ignore_ascii_case("BEF") {
            Some(Self::Before)
        } else if token.eq_ignore_ascii_case("AFT") {
            Some(Self::After)
        } else if token.eq_ignore_ascii_case("BET") {
            Some(Self::Between)
        } else {
            None
        }
    }
}

impl fmt::Display for DateQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date as read from a record, at whatever precision the text carried.
///
/// `raw` always preserves the original text; for a `BET … AND …` range the
/// numeric fields describe the first date and the rest survives in `raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub qualifier: Option<DateQualifier>,
    pub approximate: bool,
    pub raw: String,
}

impl ParsedDate {
    /// ISO-8601 at the parsed precision (`"1985"`, `"1985-01"`,
    /// `"1985-01-15"`); `None` when not even a year was recognized.
    pub fn to_iso(&self) -> Option<String> {
        let year = self.year?;
        let mut iso = year.to_string();
        if let Some(month) = self.month {
            iso.push_str(&format!("-{month:02}"));
            if let Some(day) = self.day {
                iso.push_str(&format!("-{day:02}"));
            }
        }
        Some(iso)
    }
}

/// Render an ISO-8601 date for emission under `version`.
///
/// The "7.0" dialect carries ISO dates verbatim. Under "5.5.1" the ISO
/// parts map to traditional text (`"1985-01-15"` → `"15 JAN 1985"`,
/// `"1985-01"` → `"JAN 1985"`, `"1985"` → `"1985"`); anything that does
/// not look like an ISO date passes through unmodified.
pub fn format_date(version: GedcomVersion, iso: &str) -> String {
    match version {
        GedcomVersion::V70 => iso.to_owned(),
        GedcomVersion::V551 => format_traditional(iso),
    }
}

fn format_traditional(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            let (Some(month_name), Ok(day_number)) = (month_name(month), day.parse::<u32>())
            else {
                return iso.to_owned();
            };
            format!("{day_number} {month_name} {year}")
        }
        [year, month] => {
            let Some(month_name) = month_name(month) else {
                return iso.to_owned();
            };
            format!("{month_name} {year}")
        }
        [year] => (*year).to_owned(),
        _ => iso.to_owned(),
    }
}

fn month_name(token: &str) -> Option<&'static str> {
    let month: usize = token.parse().ok()?;
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[month - 1])
    } else {
        None
    }
}

fn month_number(token: &str) -> Option<u8> {
    if let Some(index) = MONTH_NAMES
        .iter()
        .position(|name| token.eq_ignore_ascii_case(name))
    {
        return Some(index as u8 + 1);
    }
    let month: u8 = token.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Parse a date value from a record into a [`ParsedDate`].
///
/// Accepts traditional "5.5.1" text (`"15 JAN 1985"`, `"JAN 1985"`,
/// `"1985"`, with optional `ABT`/`BEF`/`AFT`/`BET` modifiers and numeric
/// months) as well as ISO-8601 text.
pub fn parse_date(text: &str) -> ParsedDate {
    let raw = text.trim();
    let mut date = ParsedDate {
        year: None,
        month: None,
        day: None,
        qualifier: None,
        approximate: false,
        raw: raw.to_owned(),
    };

    let mut rest = raw;
    if let Some(first_token) = rest.split_whitespace().next() {
        if let Some(qualifier) = DateQualifier::from_token(first_token) {
            date.qualifier = Some(qualifier);
            date.approximate = qualifier == DateQualifier::About;
            rest = rest[first_token.len()..].trim_start();
            if qualifier == DateQualifier::Between {
                // Numeric fields describe the first date of the range.
                if let Some(and_index) = rest.to_ascii_uppercase().find(" AND ") {
                    rest = rest[..and_index].trim_end();
                }
            }
        }
    }

    if rest.contains('-') {
        parse_iso_into(&mut date, rest);
    } else {
        parse_traditional_into(&mut date, rest);
    }

    date
}

fn parse_iso_into(date: &mut ParsedDate, text: &str) {
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            date.year = year.parse().ok();
            date.month = month.parse().ok().filter(|m| (1..=12).contains(m));
            date.day = day.parse().ok().filter(|d| (1..=31).contains(d));
        }
        [year, month] => {
            date.year = year.parse().ok();
            date.month = month.parse().ok().filter(|m| (1..=12).contains(m));
        }
        _ => {}
    }
}

fn parse_traditional_into(date: &mut ParsedDate, text: &str) {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [day, month, year] => {
            date.year = year.parse().ok();
            date.month = month_number(month);
            date.day = day.parse().ok().filter(|d| (1..=31).contains(d));
        }
        [month, year] => {
            date.year = year.parse().ok();
            date.month = month_number(month);
        }
        [year] => {
            date.year = year.parse().ok();
        }
        _ => {}
    }
}

/// Normalize a record date value to ISO-8601 for the typed projections.
///
/// "7.0" values pass through untouched; "5.5.1" values are converted at
/// their parsed precision, falling back to the original text when nothing
/// date-like was recognized.
pub fn normalize_date(version: GedcomVersion, value: &str) -> String {
    match version {
        GedcomVersion::V70 => value.to_owned(),
        GedcomVersion::V551 => parse_date(value)
            .to_iso()
            .unwrap_or_else(|| value.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        format_date, normalize_date, parse_date, DateQualifier, GedcomVersion,
        ParseGedcomVersionError,
    };

    #[test]
    fn version_roundtrips_via_str() {
        for version in [GedcomVersion::V551, GedcomVersion::V70] {
            let s = version.as_str();
            let parsed: GedcomVersion = s.parse().expect("parse");
            assert_eq!(parsed, version);
            assert_eq!(parsed.to_string(), s);
        }
        assert_eq!(
            "5.5".parse::<GedcomVersion>(),
            Err(ParseGedcomVersionError)
        );
    }

    #[rstest]
    #[case("1985-01-15", "15 JAN 1985")]
    #[case("1985-12-01", "1 DEC 1985")]
    #[case("1985-01", "JAN 1985")]
    #[case("1985", "1985")]
    #[case("1985-13-01", "1985-13-01")]
    #[case("before records", "before records")]
    fn traditional_formatting(#[case] iso: &str, #[case] expected: &str) {
        assert_eq!(format_date(GedcomVersion::V551, iso), expected);
    }

    #[test]
    fn v70_passes_dates_through() {
        assert_eq!(format_date(GedcomVersion::V70, "1985-01-15"), "1985-01-15");
        assert_eq!(normalize_date(GedcomVersion::V70, "1985-01-15"), "1985-01-15");
    }

    #[rstest]
    #[case("15 JAN 1985", "1985-01-15")]
    #[case("JAN 1985", "1985-01")]
    #[case("1985", "1985")]
    #[case("15 jan 1985", "1985-01-15")]
    #[case("15 01 1985", "1985-01-15")]
    fn traditional_parsing_inverts_formatting(#[case] text: &str, #[case] iso: &str) {
        assert_eq!(parse_date(text).to_iso().as_deref(), Some(iso));
        assert_eq!(normalize_date(GedcomVersion::V551, text), iso);
    }

    #[test]
    fn format_then_parse_recovers_iso() {
        for iso in ["1985-01-15", "1985-01", "1985"] {
            let traditional = format_date(GedcomVersion::V551, iso);
            assert_eq!(parse_date(&traditional).to_iso().as_deref(), Some(iso));
        }
    }

    #[test]
    fn qualifiers_stay_out_of_the_numeric_fields() {
        let date = parse_date("ABT 15 JAN 1985");
        assert_eq!(date.qualifier, Some(DateQualifier::About));
        assert!(date.approximate);
        assert_eq!(date.year, Some(1985));
        assert_eq!(date.month, Some(1));
        assert_eq!(date.day, Some(15));
        assert_eq!(date.raw, "ABT 15 JAN 1985");

        let date = parse_date("BEF 1900");
        assert_eq!(date.qualifier, Some(DateQualifier::Before));
        assert!(!date.approximate);
        assert_eq!(date.to_iso().as_deref(), Some("1900"));
    }

    #[test]
    fn between_ranges_parse_their_first_date() {
        let date = parse_date("BET 1900 AND 1910");
        assert_eq!(date.qualifier, Some(DateQualifier::Between));
        assert_eq!(date.year, Some(1900));
        assert_eq!(date.raw, "BET 1900 AND 1910");
    }

    #[test]
    fn unrecognized_text_keeps_raw_and_yields_no_iso() {
        let date = parse_date("sometime long ago honestly");
        assert_eq!(date.to_iso(), None);
        assert_eq!(date.raw, "sometime long ago honestly");
        assert_eq!(
            normalize_date(GedcomVersion::V551, "sometime long ago honestly"),
            "sometime long ago honestly"
        );
    }

    #[test]
    fn iso_input_is_tolerated_in_traditional_files() {
        let date = parse_date("1985-01-15");
        assert_eq!(date.to_iso().as_deref(), Some("1985-01-15"));
    }
}
