// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::mem;

use super::date::{normalize_date, GedcomVersion};
use super::line::{parse_line, GedcomLine};
use super::record::{GedcomFile, Record, RecordType};
use super::types::{ParsedFamily, ParsedIndividual, ParsedName, ParsedObject, ParsedSource};
use super::warning::ValidationWarning;

const DEFAULT_CHARSET: &str = "UTF-8";
const UNTITLED_SOURCE: &str = "Untitled Source";
const UNKNOWN: &str = "UNKNOWN";

/// A parsed document plus everything recoverable that went wrong on the
/// way. Parsing is resilient: a broken record is skipped with a warning,
/// only a document with no recognizable records at all is a hard error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    file: GedcomFile,
    warnings: Vec<ValidationWarning>,
}

impl ParseOutcome {
    pub fn file(&self) -> &GedcomFile {
        &self.file
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn into_parts(self) -> (GedcomFile, Vec<ValidationWarning>) {
        (self.file, self.warnings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GedcomParseError {
    NoRecords,
}

impl fmt::Display for GedcomParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecords => f.write_str("no recognizable records in document"),
        }
    }
}

impl std::error::Error for GedcomParseError {}

/// Parse a whole document: tokenize, group level-0 records, fold
/// continuations, index tags, and discover the dialect from the header.
pub fn parse(text: &str) -> Result<ParseOutcome, GedcomParseError> {
    let mut warnings: Vec<ValidationWarning> = Vec::new();
    let mut groups: Vec<Vec<GedcomLine>> = Vec::new();
    let mut current: Vec<GedcomLine> = Vec::new();
    // After a structural error the rest of the record is unusable; skip
    // forward to the next level-0 line.
    let mut skipping = false;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let line = match parse_line(raw, line_no) {
            Ok(line) => line,
            Err(err) => {
                warnings.push(ValidationWarning::MalformedLine {
                    line_no: err.line_no(),
                    detail: err.to_string(),
                });
                current.clear();
                skipping = true;
                continue;
            }
        };

        if line.level() == 0 {
            if !current.is_empty() {
                groups.push(mem::take(&mut current));
            }
            skipping = false;
            current.push(line);
            continue;
        }

        if skipping {
            continue;
        }

        let Some(previous) = current.last() else {
            warnings.push(ValidationWarning::MalformedLine {
                line_no,
                detail: "line appears before any level-0 record".to_owned(),
            });
            skipping = true;
            continue;
        };

        if u16::from(line.level()) > u16::from(previous.level()) + 1 {
            warnings.push(ValidationWarning::LevelJump {
                line_no,
                level: line.level(),
                previous: previous.level(),
            });
            current.clear();
            skipping = true;
            continue;
        }

        current.push(line);
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut header: Option<Record> = None;
    let mut trailer: Option<Record> = None;
    let mut individuals: Vec<Record> = Vec::new();
    let mut families: Vec<Record> = Vec::new();
    let mut sources: Vec<Record> = Vec::new();
    let mut objects: Vec<Record> = Vec::new();
    let mut others: Vec<Record> = Vec::new();

    for group in groups {
        let record = Record::from_lines(group);
        match record.record_type() {
            RecordType::Header if header.is_none() => header = Some(record),
            RecordType::Trailer if trailer.is_none() => trailer = Some(record),
            RecordType::Individual => individuals.push(record),
            RecordType::Family => families.push(record),
            RecordType::Source => sources.push(record),
            RecordType::Object => objects.push(record),
            _ => others.push(record),
        }
    }

    let version = discover_version(header.as_ref(), &mut warnings);
    let charset = header
        .as_ref()
        .and_then(|record| record.first_value("CHAR"))
        .unwrap_or(DEFAULT_CHARSET)
        .to_owned();

    let file = GedcomFile::new(
        header, trailer, individuals, families, sources, objects, others, version, charset,
    );
    if file.record_count() == 0 {
        return Err(GedcomParseError::NoRecords);
    }

    Ok(ParseOutcome { file, warnings })
}

/// `HEAD` → `GEDC` → `VERS`, scoped so the program's own `SOUR` → `VERS`
/// line cannot shadow it. Unknown versions fall back to "5.5.1".
fn discover_version(
    header: Option<&Record>,
    warnings: &mut Vec<ValidationWarning>,
) -> GedcomVersion {
    let Some(header) = header else {
        return GedcomVersion::default();
    };
    let Some(gedc_index) = header.tag_index().first("GEDC") else {
        return GedcomVersion::default();
    };
    let Some(value) = header.child_value(gedc_index, "VERS") else {
        return GedcomVersion::default();
    };

    match value.parse() {
        Ok(version) => version,
        Err(_) => {
            warnings.push(ValidationWarning::UnsupportedVersion {
                value: value.to_owned(),
            });
            GedcomVersion::default()
        }
    }
}

/// Project the typed individual view out of a grouped `INDI` record.
pub fn parse_individual(record: &Record, version: GedcomVersion) -> ParsedIndividual {
    let names = record
        .values("NAME")
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(ParsedName::from_value)
        .collect();

    let sex = record
        .first_value("SEX")
        .filter(|value| matches!(*value, "M" | "F" | "X"))
        .map(str::to_owned);

    let (birth_date, birth_place) = event_detail(record, "BIRT", version);
    let (death_date, death_place) = event_detail(record, "DEAT", version);

    ParsedIndividual {
        id: record.id().unwrap_or_default().to_owned(),
        names,
        sex,
        birth_date,
        birth_place,
        death_date,
        death_place,
        occupation: record.first_value("OCCU").map(str::to_owned),
        notes: note_values(record),
        families_as_spouse: record.pointer_values("FAMS"),
        families_as_child: record.pointer_values("FAMC"),
    }
}

/// Project the typed family view out of a grouped `FAM` record.
pub fn parse_family(record: &Record, version: GedcomVersion) -> ParsedFamily {
    let (marriage_date, marriage_place) = event_detail(record, "MARR", version);
    let (divorce_date, divorce_place) = event_detail(record, "DIV", version);

    ParsedFamily {
        id: record.id().unwrap_or_default().to_owned(),
        husband_id: record.pointer_values("HUSB").into_iter().next(),
        wife_id: record.pointer_values("WIFE").into_iter().next(),
        children_ids: record.pointer_values("CHIL"),
        marriage_date,
        marriage_place,
        divorce_date,
        divorce_place,
        notes: note_values(record),
    }
}

/// Project the typed source view. A missing `TITL` resolves to the
/// documented placeholder and is reported, never fatal.
pub fn parse_source(record: &Record, warnings: &mut Vec<ValidationWarning>) -> ParsedSource {
    let id = record.id().unwrap_or_default().to_owned();
    let title = match record.first_value("TITL") {
        Some(title) => title.to_owned(),
        None => {
            warnings.push(ValidationWarning::MissingSourceTitle {
                record_id: id.clone(),
            });
            UNTITLED_SOURCE.to_owned()
        }
    };

    let repository = record
        .tag_index()
        .first("REPO")
        .map(|index| &record.lines()[index])
        .and_then(|line| {
            line.pointer()
                .map(str::to_owned)
                .or_else(|| (!line.value().is_empty()).then(|| line.value().to_owned()))
        });

    ParsedSource {
        id,
        title,
        author: record.first_value("AUTH").map(str::to_owned),
        publication_date: record.first_value("PUBL").map(str::to_owned),
        repository,
        notes: note_values(record),
    }
}

/// Project the typed media view. A missing `FILE` resolves to the
/// documented placeholder and is reported; a missing `FORM` defaults
/// silently.
pub fn parse_object(record: &Record, warnings: &mut Vec<ValidationWarning>) -> ParsedObject {
    let id = record.id().unwrap_or_default().to_owned();
    let file_path = match record.first_value("FILE") {
        Some(path) => path.to_owned(),
        None => {
            warnings.push(ValidationWarning::MissingMediaFile {
                record_id: id.clone(),
            });
            UNKNOWN.to_owned()
        }
    };

    ParsedObject {
        id,
        file_path,
        format: record
            .first_value("FORM")
            .unwrap_or(UNKNOWN)
            .to_owned(),
        title: record.first_value("TITL").map(str::to_owned),
        description: record.first_value("NOTE").map(str::to_owned),
    }
}

fn event_detail(
    record: &Record,
    tag: &str,
    version: GedcomVersion,
) -> (Option<String>, Option<String>) {
    let Some(index) = record.tag_index().first(tag) else {
        return (None, None);
    };
    let date = record
        .child_value(index, "DATE")
        .map(|value| normalize_date(version, value));
    let place = record.child_value(index, "PLAC").map(str::to_owned);
    (date, place)
}

fn note_values(record: &Record) -> Vec<String> {
    record
        .values("NOTE")
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}
