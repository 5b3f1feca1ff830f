// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use smol_str::SmolStr;

/// One physical line: `<level> [<xref>] <tag> [<value>]`.
///
/// `xref` is the `@`-delimited id a level-0 line *defines*; a value that is
/// itself `@`-delimited is a pointer to another record and is surfaced via
/// [`GedcomLine::pointer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine {
    level: u8,
    xref: Option<String>,
    tag: SmolStr,
    value: String,
}

impl GedcomLine {
    pub fn new(level: u8, tag: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            level,
            xref: None,
            tag: tag.into(),
            value: value.into(),
        }
    }

    pub fn with_xref(
        level: u8,
        xref: impl Into<String>,
        tag: impl Into<SmolStr>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            level,
            xref: Some(xref.into()),
            tag: tag.into(),
            value: value.into(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn xref(&self) -> Option<&str> {
        self.xref.as_deref()
    }

    /// The defined id with its `@` delimiters stripped (`@I1@` → `I1`).
    pub fn xref_id(&self) -> Option<&str> {
        self.xref.as_deref().map(strip_at)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// The referenced id when the value is a pointer (`@F1@` → `F1`).
    pub fn pointer(&self) -> Option<&str> {
        let value = self.value.as_str();
        if value.len() >= 3 && value.starts_with('@') && value.ends_with('@') {
            Some(&value[1..value.len() - 1])
        } else {
            None
        }
    }

    pub(crate) fn append_to_value(&mut self, separator: Option<char>, text: &str) {
        if let Some(separator) = separator {
            self.value.push(separator);
        }
        self.value.push_str(text);
    }
}

fn strip_at(xref: &str) -> &str {
    xref.trim_matches('@')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineParseError {
    InvalidLevel { line_no: usize, token: String },
    MissingTag { line_no: usize, line: String },
}

impl LineParseError {
    pub fn line_no(&self) -> usize {
        match self {
            Self::InvalidLevel { line_no, .. } | Self::MissingTag { line_no, .. } => *line_no,
        }
    }
}

impl fmt::Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { line_no, token } => write!(
                f,
                "invalid level token on line {line_no}: {token:?} (expected a non-negative integer)"
            ),
            Self::MissingTag { line_no, line } => {
                write!(f, "missing tag on line {line_no}: {line:?}")
            }
        }
    }
}

impl std::error::Error for LineParseError {}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)(?:\s+(@[^@\s]+@))?\s+([A-Za-z0-9_]+)(?:\s(.*))?$")
            .expect("valid line pattern")
    })
}

/// Tokenize one physical line. `line_no` is 1-based and only used for error
/// reporting.
pub fn parse_line(raw: &str, line_no: usize) -> Result<GedcomLine, LineParseError> {
    let raw = raw.trim_end_matches('\r');
    let trimmed = raw.trim_start();

    let Some(captures) = line_pattern().captures(trimmed) else {
        // Distinguish a bad level token from a level with no tag after it.
        let mut tokens = trimmed.split_whitespace();
        let leading = tokens.next().unwrap_or_default();
        if leading.parse::<u8>().is_ok() {
            return Err(LineParseError::MissingTag {
                line_no,
                line: trimmed.to_owned(),
            });
        }
        return Err(LineParseError::InvalidLevel {
            line_no,
            token: leading.to_owned(),
        });
    };

    let level_token = captures.get(1).expect("level group").as_str();
    let level: u8 = level_token
        .parse()
        .map_err(|_| LineParseError::InvalidLevel {
            line_no,
            token: level_token.to_owned(),
        })?;

    let xref = captures.get(2).map(|m| m.as_str().to_owned());
    let tag = SmolStr::new(captures.get(3).expect("tag group").as_str());
    let value = captures
        .get(4)
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default();

    Ok(GedcomLine {
        level,
        xref,
        tag,
        value,
    })
}

/// Append one rendered physical line (plus newline) to `out`.
pub fn push_line(out: &mut String, level: u8, xref: Option<&str>, tag: &str, value: &str) {
    let mut level_buf = itoa::Buffer::new();
    out.push_str(level_buf.format(level));
    out.push(' ');
    if let Some(xref) = xref {
        out.push('@');
        out.push_str(xref.trim_matches('@'));
        out.push('@');
        out.push(' ');
    }
    out.push_str(tag);
    if !value.is_empty() {
        out.push(' ');
        out.push_str(value);
    }
    out.push('\n');
}
