// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::IndividualId;

/// A person in the internal family-tree model.
///
/// Dates are ISO-8601 strings at whatever precision the source carried
/// (`"1985"`, `"1985-01"`, `"1985-01-15"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    person_id: IndividualId,
    first_name: String,
    last_name: Option<String>,
    gender: Option<Gender>,
    birth_date: Option<String>,
    birth_place: Option<String>,
    death_date: Option<String>,
    death_place: Option<String>,
    occupation: Option<String>,
    notes: Vec<String>,
}

impl Person {
    pub fn new(person_id: IndividualId, first_name: impl Into<String>) -> Self {
        Self {
            person_id,
            first_name: first_name.into(),
            last_name: None,
            gender: None,
            birth_date: None,
            birth_place: None,
            death_date: None,
            death_place: None,
            occupation: None,
            notes: Vec::new(),
        }
    }

    pub fn person_id(&self) -> &IndividualId {
        &self.person_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    pub fn birth_place(&self) -> Option<&str> {
        self.birth_place.as_deref()
    }

    pub fn death_date(&self) -> Option<&str> {
        self.death_date.as_deref()
    }

    pub fn death_place(&self) -> Option<&str> {
        self.death_place.as_deref()
    }

    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name<T: Into<String>>(&mut self, last_name: Option<T>) {
        self.last_name = last_name.map(Into::into);
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_birth_date<T: Into<String>>(&mut self, birth_date: Option<T>) {
        self.birth_date = birth_date.map(Into::into);
    }

    pub fn set_birth_place<T: Into<String>>(&mut self, birth_place: Option<T>) {
        self.birth_place = birth_place.map(Into::into);
    }

    pub fn set_death_date<T: Into<String>>(&mut self, death_date: Option<T>) {
        self.death_date = death_date.map(Into::into);
    }

    pub fn set_death_place<T: Into<String>>(&mut self, death_place: Option<T>) {
        self.death_place = death_place.map(Into::into);
    }

    pub fn set_occupation<T: Into<String>>(&mut self, occupation: Option<T>) {
        self.occupation = occupation.map(Into::into);
    }

    pub fn notes_mut(&mut self) -> &mut Vec<String> {
        &mut self.notes
    }

    /// Display name in `"<given> <surname>"` order, given-name-only when no
    /// surname is known.
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last_name) if !last_name.is_empty() => {
                format!("{} {}", self.first_name, last_name)
            }
            _ => self.first_name.clone(),
        }
    }
}

/// Normalized gender, mapped from the format's `M`/`F`/`X` sex codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }

    /// Single-letter sex code used on the wire.
    pub fn sex_code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "X",
        }
    }

    pub fn from_sex_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            "X" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError;

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid gender")
    }
}

impl std::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "OTHER" => Ok(Self::Other),
            _ => Err(ParseGenderError),
        }
    }
}
