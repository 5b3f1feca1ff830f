// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use kindred::format::gedcom::{GedcomFamily, GedcomFile, GedcomIndividual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeLongNotes,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeLongNotes => "large_long_notes",
        }
    }

    fn individuals(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 200,
            Self::LargeLongNotes => 1_000,
        }
    }

    fn note_len(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 60,
            Self::LargeLongNotes => 400,
        }
    }
}

fn note_text(person_index: usize, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len);
    let mut word = 0usize;
    while out.len() < target_len {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str("entry");
        out.push_str(&(person_index + word).to_string());
        word += 1;
    }
    out.truncate(target_len);
    out
}

/// Deterministic payload set: `n` individuals paired off into `n / 2`
/// families, every odd person married to the next even one, each couple
/// with one child further down the list.
pub fn fixture(case: Case) -> (Vec<GedcomIndividual>, Vec<GedcomFamily>) {
    let count = case.individuals();
    let note_len = case.note_len();

    let individuals: Vec<GedcomIndividual> = (1..=count)
        .map(|n| {
            let notes = if note_len == 0 {
                Vec::new()
            } else {
                vec![note_text(n, note_len)]
            };
            GedcomIndividual {
                xref: format!("I{n}"),
                name: format!("Person{n} /Bench/"),
                sex: Some(if n % 2 == 0 { "F" } else { "M" }.to_owned()),
                birth_date: Some(format!("{}-{:02}-{:02}", 1850 + n % 120, 1 + n % 12, 1 + n % 28)),
                birth_place: Some(format!("Town{}", n % 40)),
                occupation: (n % 3 == 0).then(|| "Farmer".to_owned()),
                notes,
                ..GedcomIndividual::default()
            }
        })
        .collect();

    let families: Vec<GedcomFamily> = (1..=count / 2)
        .map(|n| {
            let child = 2 * n + 1;
            GedcomFamily {
                xref: format!("F{n}"),
                husband_xref: Some(format!("I{}", 2 * n - 1)),
                wife_xref: Some(format!("I{}", 2 * n)),
                children_xrefs: if child <= count {
                    vec![format!("I{child}")]
                } else {
                    Vec::new()
                },
                marriage_date: Some(format!("{}-06", 1875 + n % 100)),
                ..GedcomFamily::default()
            }
        })
        .collect();

    (individuals, families)
}

pub fn checksum_file(file: &GedcomFile) -> u64 {
    let mut acc = 0u64;
    for record in file
        .individuals()
        .iter()
        .chain(file.families())
        .chain(file.sources())
        .chain(file.objects())
    {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(record.id().map(str::len).unwrap_or(0) as u64);
        for line in record.lines() {
            acc = acc.wrapping_mul(131).wrapping_add(line.level() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(line.tag().len() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(line.value().len() as u64);
        }
    }
    acc
}
