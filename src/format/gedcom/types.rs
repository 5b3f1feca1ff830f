// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary payloads: what callers hand the generator and what the parser
//! projects out of grouped records.

use serde::{Deserialize, Serialize};

/// Generator payload for one `INDI` record. Dates are ISO-8601 strings;
/// the `name` is emitted verbatim in `"Given /Surname/"` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GedcomIndividual {
    pub xref: String,
    pub name: String,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub death_date: Option<String>,
    pub death_place: Option<String>,
    pub occupation: Option<String>,
    pub notes: Vec<String>,
    pub spouse_family_xrefs: Vec<String>,
    pub child_family_xrefs: Vec<String>,
}

/// Generator payload for one `FAM` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GedcomFamily {
    pub xref: String,
    pub husband_xref: Option<String>,
    pub wife_xref: Option<String>,
    pub children_xrefs: Vec<String>,
    pub marriage_date: Option<String>,
    pub marriage_place: Option<String>,
    pub divorce_date: Option<String>,
    pub divorce_place: Option<String>,
    pub notes: Vec<String>,
}

/// Generator payload for one `SOUR` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GedcomSource {
    pub xref: String,
    pub title: String,
    pub author: Option<String>,
    pub publication: Option<String>,
    pub repository: Option<String>,
    pub notes: Vec<String>,
}

/// Generator payload for one `OBJE` (media) record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GedcomMedia {
    pub xref: String,
    pub file_path: String,
    pub format: Option<String>,
    pub title: Option<String>,
    pub notes: Vec<String>,
}

/// One name variant: the verbatim value plus the optional given/surname
/// split derived from the `/Surname/` delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub full: String,
    pub given: Option<String>,
    pub surname: Option<String>,
}

impl ParsedName {
    /// Split a `NAME` value. Text before the first `/` is the given name,
    /// text between the slash pair the surname; a value without the slash
    /// pair is treated as given-name-only.
    pub fn from_value(value: &str) -> Self {
        let full = value.to_owned();

        let Some(open) = value.find('/') else {
            let given = value.trim();
            return Self {
                full,
                given: (!given.is_empty()).then(|| given.to_owned()),
                surname: None,
            };
        };

        let given = value[..open].trim();
        let after = &value[open + 1..];
        let surname = match after.find('/') {
            Some(close) => after[..close].trim(),
            None => after.trim(),
        };

        Self {
            full,
            given: (!given.is_empty()).then(|| given.to_owned()),
            surname: (!surname.is_empty()).then(|| surname.to_owned()),
        }
    }
}

/// Typed view over one `INDI` record. Derived once by the parser, never
/// mutated after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIndividual {
    pub id: String,
    pub names: Vec<ParsedName>,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub death_date: Option<String>,
    pub death_place: Option<String>,
    pub occupation: Option<String>,
    pub notes: Vec<String>,
    pub families_as_spouse: Vec<String>,
    pub families_as_child: Vec<String>,
}

/// Typed view over one `FAM` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFamily {
    pub id: String,
    pub husband_id: Option<String>,
    pub wife_id: Option<String>,
    pub children_ids: Vec<String>,
    pub marriage_date: Option<String>,
    pub marriage_place: Option<String>,
    pub divorce_date: Option<String>,
    pub divorce_place: Option<String>,
    pub notes: Vec<String>,
}

/// Typed view over one `SOUR` record. `title` is never empty; a missing
/// `TITL` resolves to the `"Untitled Source"` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSource {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub publication_date: Option<String>,
    pub repository: Option<String>,
    pub notes: Vec<String>,
}

/// Typed view over one `OBJE` record. A missing `FILE` resolves to the
/// `"UNKNOWN"` placeholder, as does a missing `FORM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedObject {
    pub id: String,
    pub file_path: String,
    pub format: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ParsedName;

    #[test]
    fn splits_given_and_surname() {
        let name = ParsedName::from_value("John /Smith/");
        assert_eq!(name.full, "John /Smith/");
        assert_eq!(name.given.as_deref(), Some("John"));
        assert_eq!(name.surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn name_without_slashes_is_given_only() {
        let name = ParsedName::from_value("Madonna");
        assert_eq!(name.given.as_deref(), Some("Madonna"));
        assert_eq!(name.surname, None);
    }

    #[test]
    fn unclosed_slash_still_yields_a_surname() {
        let name = ParsedName::from_value("John /Smith");
        assert_eq!(name.given.as_deref(), Some("John"));
        assert_eq!(name.surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn empty_segments_become_none() {
        let name = ParsedName::from_value("//");
        assert_eq!(name.given, None);
        assert_eq!(name.surname, None);
        assert_eq!(name.full, "//");
    }
}
