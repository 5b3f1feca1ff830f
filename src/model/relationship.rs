// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{FamilyId, IndividualId};

/// A concrete person-to-person edge materialized from a family record.
///
/// The `family_id` records which family produced the edge so the inverse
/// mapping can regroup edges into family records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    kind: RelationshipKind,
    from_person_id: IndividualId,
    to_person_id: IndividualId,
    family_id: FamilyId,
}

impl Relationship {
    pub fn new(
        kind: RelationshipKind,
        from_person_id: IndividualId,
        to_person_id: IndividualId,
        family_id: FamilyId,
    ) -> Self {
        Self {
            kind,
            from_person_id,
            to_person_id,
            family_id,
        }
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    pub fn from_person_id(&self) -> &IndividualId {
        &self.from_person_id
    }

    pub fn to_person_id(&self) -> &IndividualId {
        &self.to_person_id
    }

    pub fn family_id(&self) -> &FamilyId {
        &self.family_id
    }
}

/// Edge kind: `Spouse` links partners, `ParentChild` points parent → child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipKind {
    Spouse,
    ParentChild,
}

impl RelationshipKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::ParentChild => "parent_child",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRelationshipKindError;

impl fmt::Display for ParseRelationshipKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid relationship kind")
    }
}

impl std::error::Error for ParseRelationshipKindError {}

impl FromStr for RelationshipKind {
    type Err = ParseRelationshipKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spouse" => Ok(Self::Spouse),
            "parent_child" => Ok(Self::ParentChild),
            _ => Err(ParseRelationshipKindError),
        }
    }
}
