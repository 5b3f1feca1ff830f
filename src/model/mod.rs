// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Internal family-tree model.
//!
//! People reference each other through materialized [`Relationship`] edges;
//! the wire format's family-id indirection lives only in the codec layer.

pub mod ids;
pub mod person;
pub mod relationship;
pub mod tree;

pub use ids::{FamilyId, Id, IdError, IndividualId, MediaId, SourceId};
pub use person::{Gender, ParseGenderError, Person};
pub use relationship::{ParseRelationshipKindError, Relationship, RelationshipKind};
pub use tree::FamilyTree;
