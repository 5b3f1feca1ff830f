// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end properties of the generate → parse round trip.

use kindred::format::gedcom::{
    generate, parse, parse_individual, GedcomFamily, GedcomIndividual, GedcomVersion,
    GeneratorConfig,
};
use kindred::query::extract_event_sources;

fn john_smith() -> GedcomIndividual {
    GedcomIndividual {
        xref: "I1".to_owned(),
        name: "John /Smith/".to_owned(),
        sex: Some("M".to_owned()),
        birth_date: Some("1985-01-15".to_owned()),
        ..GedcomIndividual::default()
    }
}

fn fixture_individuals(count: usize) -> Vec<GedcomIndividual> {
    (1..=count)
        .map(|n| GedcomIndividual {
            xref: format!("I{n}"),
            name: format!("Person{n} /Fixture/"),
            sex: Some(if n % 2 == 0 { "F" } else { "M" }.to_owned()),
            birth_date: Some(format!("{}-06-01", 1900 + n)),
            ..GedcomIndividual::default()
        })
        .collect()
}

fn fixture_families(count: usize) -> Vec<GedcomFamily> {
    (1..=count)
        .map(|n| GedcomFamily {
            xref: format!("F{n}"),
            husband_xref: Some(format!("I{}", 2 * n - 1)),
            wife_xref: Some(format!("I{}", 2 * n)),
            marriage_date: Some(format!("{}-05", 1925 + n)),
            ..GedcomFamily::default()
        })
        .collect()
}

#[test]
fn round_trip_preserves_record_counts() {
    let individuals = fixture_individuals(8);
    let families = fixture_families(3);
    let text = generate(&GeneratorConfig::default(), &individuals, &families);

    let outcome = parse(&text).expect("parse");
    assert_eq!(outcome.file().individuals().len(), individuals.len());
    assert_eq!(outcome.file().families().len(), families.len());
    assert!(outcome.warnings().is_empty());
}

#[test]
fn long_notes_wrap_and_no_line_exceeds_the_limit() {
    let config = GeneratorConfig::default();
    let mut noisy = john_smith();
    noisy.notes.push(
        "He spent forty years keeping meticulous notebooks about the weather, \
         the price of grain, and the comings and goings of every neighbor on \
         the lane, all of it in a cramped hand nobody else could read."
            .to_owned(),
    );
    let text = generate(&config, &[noisy], &[]);

    assert!(text
        .lines()
        .any(|line| line.starts_with("2 CONT ") || line.starts_with("2 CONC ")));
    for line in text.lines() {
        assert!(
            line.chars().count() <= config.max_line_length,
            "overlong line: {line:?}"
        );
    }

    let outcome = parse(&text).expect("parse");
    let file = outcome.file();
    let john = parse_individual(&file.individuals()[0], file.version());
    assert_eq!(john.notes.len(), 1);
    assert!(john.notes[0].contains("meticulous notebooks"));
}

#[test]
fn every_generated_line_matches_the_grammar() {
    let text = generate(
        &GeneratorConfig {
            file_date: Some("2026-02-07".to_owned()),
            ..GeneratorConfig::default()
        },
        &fixture_individuals(4),
        &fixture_families(2),
    );

    for line in text.lines() {
        let digits: String = line.chars().take_while(char::is_ascii_digit).collect();
        assert!(!digits.is_empty(), "line without level: {line:?}");
        let level: u8 = digits.parse().expect("level fits u8");
        assert!(level <= 4, "nesting too deep: {line:?}");
        assert_eq!(line.as_bytes()[digits.len()], b' ');
    }

    let roots: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("0 "))
        .collect();
    assert!(roots.first().is_some_and(|line| *line == "0 HEAD"));
    assert!(roots.last().is_some_and(|line| *line == "0 TRLR"));
}

#[test]
fn date_inverse_holds_in_both_dialects() {
    let v70 = GeneratorConfig::with_version(GedcomVersion::V70);
    let text = generate(&v70, &[john_smith()], &[]);
    let outcome = parse(&text).expect("parse 7.0");
    let file = outcome.file();
    assert_eq!(file.version(), GedcomVersion::V70);
    let john = parse_individual(&file.individuals()[0], file.version());
    assert_eq!(john.birth_date.as_deref(), Some("1985-01-15"));

    let v551 = GeneratorConfig::default();
    let text = generate(&v551, &[john_smith()], &[]);
    assert!(text.contains("2 DATE 15 JAN 1985"));
    let outcome = parse(&text).expect("parse 5.5.1");
    let file = outcome.file();
    let john = parse_individual(&file.individuals()[0], file.version());
    assert_eq!(john.birth_date.as_deref(), Some("1985-01-15"));
}

#[test]
fn minimal_individual_block_is_just_the_name() {
    let minimal = GedcomIndividual {
        xref: "I1".to_owned(),
        name: "John /Smith/".to_owned(),
        ..GedcomIndividual::default()
    };
    let text = generate(&GeneratorConfig::default(), &[minimal], &[]);

    let block: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "0 @I1@ INDI")
        .skip(1)
        .take_while(|line| !line.starts_with("0 "))
        .collect();
    assert_eq!(block, vec!["1 NAME John /Smith/"]);
}

#[test]
fn event_scoped_citations_respect_record_structure() {
    let text = "\
0 @I1@ INDI
1 NAME John /Smith/
1 BIRT
2 DATE 15 JAN 1985
2 SOUR @S1@
1 SOUR @S2@
1 DEAT
2 SOUR @S3@
0 TRLR
";
    let outcome = parse(text).expect("parse");
    let record = &outcome.file().individuals()[0];

    assert_eq!(extract_event_sources(record, "BIRT"), vec!["S1".to_owned()]);
    assert_eq!(extract_event_sources(record, "DEAT"), vec!["S3".to_owned()]);
}
