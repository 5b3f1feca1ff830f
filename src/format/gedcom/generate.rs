// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::date::{format_date, GedcomVersion};
use super::line::push_line;
use super::types::{GedcomFamily, GedcomIndividual, GedcomMedia, GedcomSource};
use super::wrap::{push_wrapped_line, DEFAULT_MAX_LINE_LENGTH};

/// Version string the header advertises for this tool.
const GENERATOR_VERSION: &str = "1.0";

const DEFAULT_SOURCE_PROGRAM: &str = "program-name";
const DEFAULT_SUBMITTER_NAME: &str = "Unknown Submitter";
const SUBMITTER_XREF: &str = "SUBM1";

/// Generator settings. `generate` is pure; the header `DATE` therefore
/// comes from `file_date` (ISO-8601) and the line is omitted when it is
/// `None`. Callers that want "today" fill it in themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source_program: String,
    pub submitter_name: String,
    pub max_line_length: usize,
    pub version: GedcomVersion,
    pub file_date: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_program: DEFAULT_SOURCE_PROGRAM.to_owned(),
            submitter_name: DEFAULT_SUBMITTER_NAME.to_owned(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            version: GedcomVersion::default(),
            file_date: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_version(version: GedcomVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }
}

/// Serialize a whole document: HEAD, SUBM, one INDI per individual and one
/// FAM per family in input order, then TRLR.
///
/// `generate_source`/`generate_object` blocks are *not* auto-included;
/// callers splice those in themselves.
pub fn generate(
    config: &GeneratorConfig,
    individuals: &[GedcomIndividual],
    families: &[GedcomFamily],
) -> String {
    let mut out = String::new();

    push_header(&mut out, config);
    push_submitter(&mut out, config);

    for individual in individuals {
        push_individual(&mut out, config, individual);
    }
    for family in families {
        push_family(&mut out, config, family);
    }

    push_line(&mut out, 0, None, "TRLR", "");
    out
}

fn push_header(out: &mut String, config: &GeneratorConfig) {
    push_line(out, 0, None, "HEAD", "");
    push_line(out, 1, None, "SOUR", &config.source_program);
    push_line(out, 2, None, "NAME", &config.source_program);
    push_line(out, 2, None, "VERS", GENERATOR_VERSION);
    if let Some(file_date) = config.file_date.as_deref() {
        push_line(out, 1, None, "DATE", &format_date(config.version, file_date));
    }
    push_line(out, 1, None, "GEDC", "");
    push_line(out, 2, None, "VERS", config.version.as_str());
    push_line(out, 2, None, "FORM", "LINEAGE-LINKED");
    push_line(out, 1, None, "CHAR", "UTF-8");
    push_line(out, 1, None, "SUBM", &pointer_value(SUBMITTER_XREF));
}

fn push_submitter(out: &mut String, config: &GeneratorConfig) {
    push_line(out, 0, Some(SUBMITTER_XREF), "SUBM", "");
    push_line(out, 1, None, "NAME", &config.submitter_name);
}

fn push_individual(out: &mut String, config: &GeneratorConfig, individual: &GedcomIndividual) {
    push_line(out, 0, Some(&individual.xref), "INDI", "");
    push_line(out, 1, None, "NAME", &individual.name);

    if let Some(sex) = individual.sex.as_deref() {
        push_line(out, 1, None, "SEX", sex);
    }

    push_event(
        out,
        config,
        "BIRT",
        individual.birth_date.as_deref(),
        individual.birth_place.as_deref(),
    );
    push_event(
        out,
        config,
        "DEAT",
        individual.death_date.as_deref(),
        individual.death_place.as_deref(),
    );

    if let Some(occupation) = individual.occupation.as_deref() {
        push_line(out, 1, None, "OCCU", occupation);
    }

    for note in &individual.notes {
        push_wrapped_line(out, 1, "NOTE", note, config.max_line_length);
    }

    for family_xref in &individual.spouse_family_xrefs {
        push_line(out, 1, None, "FAMS", &pointer_value(family_xref));
    }
    for family_xref in &individual.child_family_xrefs {
        push_line(out, 1, None, "FAMC", &pointer_value(family_xref));
    }
}

fn push_family(out: &mut String, config: &GeneratorConfig, family: &GedcomFamily) {
    push_line(out, 0, Some(&family.xref), "FAM", "");

    if let Some(husband_xref) = family.husband_xref.as_deref() {
        push_line(out, 1, None, "HUSB", &pointer_value(husband_xref));
    }
    if let Some(wife_xref) = family.wife_xref.as_deref() {
        push_line(out, 1, None, "WIFE", &pointer_value(wife_xref));
    }

    push_event(
        out,
        config,
        "MARR",
        family.marriage_date.as_deref(),
        family.marriage_place.as_deref(),
    );
    push_event(
        out,
        config,
        "DIV",
        family.divorce_date.as_deref(),
        family.divorce_place.as_deref(),
    );

    for child_xref in &family.children_xrefs {
        push_line(out, 1, None, "CHIL", &pointer_value(child_xref));
    }

    for note in &family.notes {
        push_wrapped_line(out, 1, "NOTE", note, config.max_line_length);
    }
}

/// Event sub-blocks appear only when at least one of date/place is present.
fn push_event(
    out: &mut String,
    config: &GeneratorConfig,
    tag: &str,
    date: Option<&str>,
    place: Option<&str>,
) {
    if date.is_none() && place.is_none() {
        return;
    }
    push_line(out, 1, None, tag, "");
    if let Some(date) = date {
        push_line(out, 2, None, "DATE", &format_date(config.version, date));
    }
    if let Some(place) = place {
        push_line(out, 2, None, "PLAC", place);
    }
}

/// Serialize a single standalone `SOUR` record block.
pub fn generate_source(config: &GeneratorConfig, source: &GedcomSource) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, Some(&source.xref), "SOUR", "");
    push_wrapped_line(&mut out, 1, "TITL", &source.title, config.max_line_length);
    if let Some(author) = source.author.as_deref() {
        push_line(&mut out, 1, None, "AUTH", author);
    }
    if let Some(publication) = source.publication.as_deref() {
        push_line(&mut out, 1, None, "PUBL", publication);
    }
    if let Some(repository) = source.repository.as_deref() {
        push_line(&mut out, 1, None, "REPO", repository);
    }
    for note in &source.notes {
        push_wrapped_line(&mut out, 1, "NOTE", note, config.max_line_length);
    }
    out
}

/// Serialize a single standalone `OBJE` record block.
pub fn generate_object(config: &GeneratorConfig, media: &GedcomMedia) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, Some(&media.xref), "OBJE", "");
    push_line(&mut out, 1, None, "FILE", &media.file_path);
    if let Some(format) = media.format.as_deref() {
        push_line(&mut out, 2, None, "FORM", format);
    }
    if let Some(title) = media.title.as_deref() {
        push_line(&mut out, 1, None, "TITL", title);
    }
    for note in &media.notes {
        push_wrapped_line(&mut out, 1, "NOTE", note, config.max_line_length);
    }
    out
}

/// Wrap an id in `@` delimiters; a value that already carries them is
/// passed through so malformed caller xrefs stay garbage-in/garbage-out.
fn pointer_value(id: &str) -> String {
    if id.len() >= 3 && id.starts_with('@') && id.ends_with('@') {
        id.to_owned()
    } else {
        format!("@{id}@")
    }
}
