// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Conversion between the codec's typed projections and the internal
//! family-tree model.
//!
//! The wire format links people through family records; the model keeps
//! concrete person-to-person edges with the family id as provenance, so
//! the inverse mapping can regroup edges into records.

use std::collections::{BTreeMap, BTreeSet};

use crate::format::gedcom::{
    parse_family, parse_individual, GedcomFamily, GedcomFile, GedcomIndividual, ParsedFamily,
    ParsedIndividual, ValidationWarning,
};
use crate::model::{
    FamilyId, FamilyTree, Gender, IndividualId, Person, Relationship, RelationshipKind,
};

/// Build the internal model from a parsed document.
///
/// Unresolved family or person references are preserved as warnings, never
/// repaired and never fatal.
pub fn map_from_gedcom(file: &GedcomFile) -> (FamilyTree, Vec<ValidationWarning>) {
    let version = file.version();
    let parsed_individuals: Vec<ParsedIndividual> = file
        .individuals()
        .iter()
        .map(|record| parse_individual(record, version))
        .collect();
    let parsed_families: Vec<ParsedFamily> = file
        .families()
        .iter()
        .map(|record| parse_family(record, version))
        .collect();

    let mut warnings: Vec<ValidationWarning> = Vec::new();
    let mut tree = FamilyTree::new();

    for parsed in &parsed_individuals {
        let Ok(person_id) = IndividualId::new(parsed.id.clone()) else {
            continue;
        };

        let name = parsed.names.first();
        let first_name = name
            .and_then(|name| name.given.clone())
            .unwrap_or_default();

        let mut person = Person::new(person_id.clone(), first_name);
        person.set_last_name(name.and_then(|name| name.surname.clone()));
        person.set_gender(parsed.sex.as_deref().and_then(Gender::from_sex_code));
        person.set_birth_date(parsed.birth_date.clone());
        person.set_birth_place(parsed.birth_place.clone());
        person.set_death_date(parsed.death_date.clone());
        person.set_death_place(parsed.death_place.clone());
        person.set_occupation(parsed.occupation.clone());
        person.notes_mut().extend(parsed.notes.iter().cloned());

        tree.people_mut().insert(person_id, person);
    }

    let family_ids: BTreeSet<&str> = parsed_families
        .iter()
        .map(|family| family.id.as_str())
        .collect();
    for parsed in &parsed_individuals {
        for (tag, targets) in [
            ("FAMS", &parsed.families_as_spouse),
            ("FAMC", &parsed.families_as_child),
        ] {
            for target in targets {
                if !family_ids.contains(target.as_str()) {
                    warnings.push(ValidationWarning::DanglingReference {
                        tag: tag.to_owned(),
                        from_id: parsed.id.clone(),
                        target_id: target.clone(),
                    });
                }
            }
        }
    }

    let mut edges: Vec<Relationship> = Vec::new();
    for family in &parsed_families {
        let Ok(family_id) = FamilyId::new(family.id.clone()) else {
            continue;
        };

        let husband = family
            .husband_id
            .as_deref()
            .and_then(|target| resolve_member(&tree, &family.id, "HUSB", target, &mut warnings));
        let wife = family
            .wife_id
            .as_deref()
            .and_then(|target| resolve_member(&tree, &family.id, "WIFE", target, &mut warnings));

        if let (Some(husband), Some(wife)) = (&husband, &wife) {
            edges.push(Relationship::new(
                RelationshipKind::Spouse,
                husband.clone(),
                wife.clone(),
                family_id.clone(),
            ));
        }

        let children: Vec<IndividualId> = family
            .children_ids
            .iter()
            .filter_map(|target| resolve_member(&tree, &family.id, "CHIL", target, &mut warnings))
            .collect();

        for parent in [&husband, &wife].into_iter().flatten() {
            for child in &children {
                edges.push(Relationship::new(
                    RelationshipKind::ParentChild,
                    parent.clone(),
                    child.clone(),
                    family_id.clone(),
                ));
            }
        }
    }
    tree.relationships_mut().extend(edges);

    (tree, warnings)
}

fn resolve_member(
    tree: &FamilyTree,
    family_id: &str,
    tag: &str,
    target: &str,
    warnings: &mut Vec<ValidationWarning>,
) -> Option<IndividualId> {
    if let Ok(person_id) = IndividualId::new(target) {
        if tree.people().contains_key(&person_id) {
            return Some(person_id);
        }
    }
    warnings.push(ValidationWarning::DanglingReference {
        tag: tag.to_owned(),
        from_id: family_id.to_owned(),
        target_id: target.to_owned(),
    });
    None
}

#[derive(Debug, Default)]
struct FamilyDraft {
    husband: Option<IndividualId>,
    wife: Option<IndividualId>,
    children: Vec<IndividualId>,
}

impl FamilyDraft {
    fn contains_parent(&self, person_id: &IndividualId) -> bool {
        self.husband.as_ref() == Some(person_id) || self.wife.as_ref() == Some(person_id)
    }

    /// Slot a parent by gender, falling back to whichever seat is free.
    fn assign_parent(&mut self, tree: &FamilyTree, person_id: &IndividualId) {
        if self.contains_parent(person_id) {
            return;
        }
        let gender = tree.person(person_id).and_then(Person::gender);
        match gender {
            Some(Gender::Female) => {
                if self.wife.is_none() {
                    self.wife = Some(person_id.clone());
                } else if self.husband.is_none() {
                    self.husband = Some(person_id.clone());
                }
            }
            _ => {
                if self.husband.is_none() {
                    self.husband = Some(person_id.clone());
                } else if self.wife.is_none() {
                    self.wife = Some(person_id.clone());
                }
            }
        }
    }
}

/// Rebuild generator payloads from the internal model.
///
/// Families are regrouped from the edges' provenance ids; people are
/// emitted in id order with their family memberships rederived.
pub fn map_to_gedcom(tree: &FamilyTree) -> (Vec<GedcomIndividual>, Vec<GedcomFamily>) {
    let mut drafts: BTreeMap<FamilyId, FamilyDraft> = BTreeMap::new();

    for edge in tree.relationships() {
        let draft = drafts.entry(edge.family_id().clone()).or_default();
        match edge.kind() {
            RelationshipKind::Spouse => {
                if draft.husband.is_none() {
                    draft.husband = Some(edge.from_person_id().clone());
                }
                if draft.wife.is_none() {
                    draft.wife = Some(edge.to_person_id().clone());
                }
            }
            RelationshipKind::ParentChild => {
                draft.assign_parent(tree, edge.from_person_id());
                if !draft.children.contains(edge.to_person_id()) {
                    draft.children.push(edge.to_person_id().clone());
                }
            }
        }
    }

    let mut spouse_memberships: BTreeMap<&IndividualId, Vec<String>> = BTreeMap::new();
    let mut child_memberships: BTreeMap<&IndividualId, Vec<String>> = BTreeMap::new();
    for (family_id, draft) in &drafts {
        for parent in [&draft.husband, &draft.wife].into_iter().flatten() {
            spouse_memberships
                .entry(parent)
                .or_default()
                .push(family_id.to_string());
        }
        for child in &draft.children {
            child_memberships
                .entry(child)
                .or_default()
                .push(family_id.to_string());
        }
    }

    let individuals = tree
        .people()
        .iter()
        .map(|(person_id, person)| GedcomIndividual {
            xref: person_id.to_string(),
            name: wire_name(person),
            sex: person.gender().map(|gender| gender.sex_code().to_owned()),
            birth_date: person.birth_date().map(str::to_owned),
            birth_place: person.birth_place().map(str::to_owned),
            death_date: person.death_date().map(str::to_owned),
            death_place: person.death_place().map(str::to_owned),
            occupation: person.occupation().map(str::to_owned),
            notes: person.notes().to_vec(),
            spouse_family_xrefs: spouse_memberships.get(person_id).cloned().unwrap_or_default(),
            child_family_xrefs: child_memberships.get(person_id).cloned().unwrap_or_default(),
        })
        .collect();

    let families = drafts
        .into_iter()
        .map(|(family_id, draft)| GedcomFamily {
            xref: family_id.into_string(),
            husband_xref: draft.husband.map(IndividualId::into_string),
            wife_xref: draft.wife.map(IndividualId::into_string),
            children_xrefs: draft
                .children
                .into_iter()
                .map(IndividualId::into_string)
                .collect(),
            ..GedcomFamily::default()
        })
        .collect();

    (individuals, families)
}

fn wire_name(person: &Person) -> String {
    match person.last_name() {
        Some(last_name) => format!("{} /{}/", person.first_name(), last_name),
        None => person.first_name().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{map_from_gedcom, map_to_gedcom};
    use crate::format::gedcom::{generate, parse, GeneratorConfig, ValidationWarning};
    use crate::model::{Gender, IndividualId, RelationshipKind};

    const SAMPLE: &str = "\
0 HEAD
1 GEDC
2 VERS 5.5.1
0 @I1@ INDI
1 NAME John /Smith/
1 SEX M
1 BIRT
2 DATE 15 JAN 1985
1 FAMS @F1@
0 @I2@ INDI
1 NAME Mary /Jones/
1 SEX F
1 FAMS @F1@
0 @I3@ INDI
1 NAME Tom /Smith/
1 FAMC @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
0 TRLR
";

    #[test]
    fn maps_people_and_materializes_edges() {
        let outcome = parse(SAMPLE).expect("parse");
        let (tree, warnings) = map_from_gedcom(outcome.file());

        assert!(warnings.is_empty());
        assert_eq!(tree.people().len(), 3);

        let john_id = IndividualId::new("I1").expect("id");
        let john = tree.person(&john_id).expect("john");
        assert_eq!(john.first_name(), "John");
        assert_eq!(john.last_name(), Some("Smith"));
        assert_eq!(john.gender(), Some(Gender::Male));
        assert_eq!(john.birth_date(), Some("1985-01-15"));

        let spouse_edges = tree
            .relationships()
            .iter()
            .filter(|edge| edge.kind() == RelationshipKind::Spouse)
            .count();
        let parent_edges = tree
            .relationships()
            .iter()
            .filter(|edge| edge.kind() == RelationshipKind::ParentChild)
            .count();
        assert_eq!(spouse_edges, 1);
        assert_eq!(parent_edges, 2);
    }

    #[test]
    fn dangling_references_warn_but_do_not_fail() {
        let text = "\
0 @I1@ INDI
1 NAME Solo /Person/
1 FAMS @F9@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I404@
";
        let outcome = parse(text).expect("parse");
        let (tree, warnings) = map_from_gedcom(outcome.file());

        assert_eq!(tree.people().len(), 1);
        assert!(tree.relationships().is_empty());
        assert_eq!(
            warnings,
            vec![
                ValidationWarning::DanglingReference {
                    tag: "FAMS".to_owned(),
                    from_id: "I1".to_owned(),
                    target_id: "F9".to_owned(),
                },
                ValidationWarning::DanglingReference {
                    tag: "WIFE".to_owned(),
                    from_id: "F1".to_owned(),
                    target_id: "I404".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn inverse_mapping_rebuilds_records_and_memberships() {
        let outcome = parse(SAMPLE).expect("parse");
        let (tree, _) = map_from_gedcom(outcome.file());
        let (individuals, families) = map_to_gedcom(&tree);

        assert_eq!(individuals.len(), 3);
        assert_eq!(families.len(), 1);

        let john = individuals
            .iter()
            .find(|individual| individual.xref == "I1")
            .expect("john");
        assert_eq!(john.name, "John /Smith/");
        assert_eq!(john.sex.as_deref(), Some("M"));
        assert_eq!(john.spouse_family_xrefs, vec!["F1".to_owned()]);

        let tom = individuals
            .iter()
            .find(|individual| individual.xref == "I3")
            .expect("tom");
        assert_eq!(tom.child_family_xrefs, vec!["F1".to_owned()]);

        let family = &families[0];
        assert_eq!(family.husband_xref.as_deref(), Some("I1"));
        assert_eq!(family.wife_xref.as_deref(), Some("I2"));
        assert_eq!(family.children_xrefs, vec!["I3".to_owned()]);
    }

    #[test]
    fn model_survives_a_full_write_read_cycle() {
        let outcome = parse(SAMPLE).expect("parse");
        let (tree, _) = map_from_gedcom(outcome.file());
        let (individuals, families) = map_to_gedcom(&tree);

        let text = generate(&GeneratorConfig::default(), &individuals, &families);
        let reparsed = parse(&text).expect("reparse");
        let (tree_again, warnings) = map_from_gedcom(reparsed.file());

        assert!(warnings.is_empty());
        assert_eq!(tree_again.people().len(), tree.people().len());
        assert_eq!(
            tree_again.relationships().len(),
            tree.relationships().len()
        );
    }
}
