// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::IndividualId;
use super::person::Person;
use super::relationship::{Relationship, RelationshipKind};

/// The top-level container the mapper produces and consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FamilyTree {
    people: BTreeMap<IndividualId, Person>,
    relationships: Vec<Relationship>,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &BTreeMap<IndividualId, Person> {
        &self.people
    }

    pub fn people_mut(&mut self) -> &mut BTreeMap<IndividualId, Person> {
        &mut self.people
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn relationships_mut(&mut self) -> &mut Vec<Relationship> {
        &mut self.relationships
    }

    pub fn person(&self, person_id: &IndividualId) -> Option<&Person> {
        self.people.get(person_id)
    }

    pub fn spouses_of(&self, person_id: &IndividualId) -> Vec<&IndividualId> {
        self.relationships
            .iter()
            .filter(|edge| edge.kind() == RelationshipKind::Spouse)
            .filter_map(|edge| {
                if edge.from_person_id() == person_id {
                    Some(edge.to_person_id())
                } else if edge.to_person_id() == person_id {
                    Some(edge.from_person_id())
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn children_of(&self, person_id: &IndividualId) -> Vec<&IndividualId> {
        self.relationships
            .iter()
            .filter(|edge| {
                edge.kind() == RelationshipKind::ParentChild && edge.from_person_id() == person_id
            })
            .map(Relationship::to_person_id)
            .collect()
    }

    pub fn parents_of(&self, person_id: &IndividualId) -> Vec<&IndividualId> {
        self.relationships
            .iter()
            .filter(|edge| {
                edge.kind() == RelationshipKind::ParentChild && edge.to_person_id() == person_id
            })
            .map(Relationship::from_person_id)
            .collect()
    }
}
